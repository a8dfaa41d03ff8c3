//! Demo CLI — correct a transcript against a reference text.
//!
//! ```text
//! correct <transcript> [--reference TEXT | --reference-file PATH]
//! ```
//!
//! Prints the correction result as JSON on stdout, in the shape a serving
//! layer would return:
//!
//! ```json
//! {"corrected_text":"书山有路。","similarity":0.875,"correction_enabled":true}
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use recite_correct::{ReferenceCorrector, ReferenceSource};

fn usage() -> ExitCode {
    eprintln!("usage: correct <transcript> [--reference TEXT | --reference-file PATH]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);

    let transcript = match args.next() {
        Some(t) => t,
        None => return usage(),
    };

    let mut source = ReferenceSource::Absent;
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--reference" => match args.next() {
                Some(text) => source = ReferenceSource::Text(text),
                None => return usage(),
            },
            "--reference-file" => match args.next() {
                Some(path) => source = ReferenceSource::File(PathBuf::from(path)),
                None => return usage(),
            },
            _ => return usage(),
        }
    }

    let corrector = ReferenceCorrector::new();
    let result = corrector.correct_source(&transcript, &source);

    let output = serde_json::json!({
        "corrected_text": result.text,
        "similarity": result.similarity,
        "correction_enabled": corrector.correction_enabled(&result),
    });
    println!("{output}");

    ExitCode::SUCCESS
}
