use std::io::{self, BufRead};
use std::{env, fs, path::Path};

fn main() {
    // The following build script converts the reference corpus into a
    // static array embedded directly into the library's final binaries
    // without incurring any runtime costs.
    //
    // Each corpus line holds a word together with the primary and
    // secondary codes it is expected to encode to, separated by tabs.
    // Lines starting with '#' are comments.
    let mut corpus_output = String::from(
        "#[allow(dead_code)]
static REFERENCE_CORPUS: [(&str, &str, &str); ",
    );

    match read_lines("./data/corpus.tsv") {
        Ok(lines) => {
            // We want to unwrap to make sure that we are able to fetch
            // every corpus entry
            let entries = lines
                .map(|l| l.unwrap())
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .collect::<Vec<String>>();

            // Finalize the variable signature and break into newline to
            // start populating the entries
            corpus_output.push_str(&entries.len().to_string());
            corpus_output.push_str("] = [\r\n");

            for line in entries.into_iter() {
                let mut fields = line.split('\t');
                let word = fields.next().unwrap();
                let primary = fields.next().unwrap_or("");
                let secondary = fields.next().unwrap_or("");

                corpus_output.push_str("\u{20}\u{20}\u{20}\u{20}(\"");
                corpus_output.push_str(word);
                corpus_output.push_str("\", \"");
                corpus_output.push_str(primary);
                corpus_output.push_str("\", \"");
                corpus_output.push_str(secondary);
                corpus_output.push_str("\"),\r\n");
            }

            // Close off variable signature
            corpus_output.push_str("];\r\n");
        }
        Err(e) => panic!(
            "{}",
            format!(
                "unable to build library due to missing corpus file(s): {}",
                e
            )
        ),
    }

    // Write out contents to the final Rust file artifact
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("data.rs");
    fs::write(dest_path, corpus_output).unwrap();
}

// The output is wrapped in a Result to allow matching on errors
// Returns an Iterator to the Reader of the lines of the file.
//
// This was taken from the official rust-lang docs:
// https://doc.rust-lang.org/stable/rust-by-example/std_misc/file/read_lines.html
fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<fs::File>>>
where
    P: AsRef<Path>,
{
    let file = fs::File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}
