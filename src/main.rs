//! resume-forge – command-line resume form → PDF.
//!
//! Usage:
//!   resume-forge --name "Jane Doe" --email jane@x.com --phone 555-1234 \
//!       [--summary ..] [--education ..] [--experience ..] [--skills "a, b"] \
//!       [--photo me.png] [--form form.json] [--sample jane] [--out dir] [--layout-json]
//!
//! Field flags override values loaded with `--form` or `--sample`. The PDF is
//! written to `<out>/<Name_With_Underscores>_resume.pdf`.

use std::{env, fs, path::PathBuf, process};

use resume_forge::form::{ResumeForm, SubmitError};
use resume_forge::pipeline::{compute_resume_layout, GeneratorConfig};
use resume_forge::samples;

/// Exit status when the required-field gate refuses the form.
const EXIT_INCOMPLETE: i32 = 2;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut form = ResumeForm::default();
    let mut overrides: Vec<(String, String)> = Vec::new();
    let mut photo_path: Option<PathBuf> = None;
    let mut out_dir = PathBuf::from(".");
    let mut layout_json = false;
    let mut title: Option<String> = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| match iter.next() {
            Some(v) => v.clone(),
            None => {
                eprintln!("Missing value for {flag}");
                print_usage(&args[0]);
                process::exit(1);
            }
        };
        match arg.as_str() {
            "--name" | "--email" | "--phone" | "--summary" | "--education" | "--experience"
            | "--skills" => {
                let v = value(arg);
                overrides.push((arg.trim_start_matches("--").to_string(), v));
            }
            "--photo" | "-p" => photo_path = Some(PathBuf::from(value(arg))),
            "--out" | "-o" => out_dir = PathBuf::from(value(arg)),
            "--title" | "-t" => title = Some(value(arg)),
            "--form" | "-f" => {
                let path = value(arg);
                let json = match fs::read_to_string(&path) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!("Error reading '{path}': {e}");
                        process::exit(1);
                    }
                };
                form = match ResumeForm::from_json(&json) {
                    Ok(f) => f,
                    Err(e) => {
                        eprintln!("Error parsing '{path}': {e}");
                        process::exit(1);
                    }
                };
            }
            "--sample" => {
                let name = value(arg);
                form = match samples::by_name(&name) {
                    Some(f) => f,
                    None => {
                        eprintln!(
                            "Unknown sample '{name}' (available: {})",
                            samples::SAMPLE_NAMES.join(", ")
                        );
                        process::exit(1);
                    }
                };
            }
            "--layout-json" => layout_json = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    for (field, v) in overrides {
        match field.as_str() {
            "name" => form.name = v,
            "email" => form.email = v,
            "phone" => form.phone = v,
            "summary" => form.summary = v,
            "education" => form.education = v,
            "experience" => form.experience = v,
            "skills" => form.skills = v,
            _ => unreachable!("only field flags are collected"),
        }
    }

    // The gate comes before any file is touched.
    if !form.missing_required().is_empty() {
        eprintln!("{}", resume_forge::form::INCOMPLETE_WARNING);
        process::exit(EXIT_INCOMPLETE);
    }

    if let Some(path) = photo_path {
        form = match form.with_photo_file(&path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("An error occurred: {}", e.message());
                process::exit(1);
            }
        };
    }

    let config = GeneratorConfig {
        title,
        ..GeneratorConfig::default()
    };

    if layout_json {
        print_layout(&form, &config);
        return;
    }

    match form.submit(&config) {
        Ok(download) => {
            if let Err(e) = fs::create_dir_all(&out_dir) {
                eprintln!("Error creating output directory: {e}");
                process::exit(1);
            }
            let output = out_dir.join(&download.file_name);
            if let Err(e) = fs::write(&output, &download.bytes) {
                eprintln!("Error writing '{}': {e}", output.display());
                process::exit(1);
            }
            eprintln!(
                "Resume generated successfully: '{}' ({} bytes, {} page{}, {})",
                output.display(),
                download.bytes.len(),
                download.pages,
                if download.pages == 1 { "" } else { "s" },
                download.mime
            );
        }
        Err(e @ SubmitError::Incomplete { .. }) => {
            eprintln!("{e}");
            process::exit(EXIT_INCOMPLETE);
        }
        Err(e @ SubmitError::Generation(_)) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Print the layout as JSON instead of writing a PDF.
fn print_layout(form: &ResumeForm, config: &GeneratorConfig) {
    match compute_resume_layout(&form.to_resume(), form.photo.as_ref(), config) {
        Ok(layout) => println!("{}", layout.to_json()),
        Err(e) => {
            eprintln!("An error occurred: {}", e.message());
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("resume-forge – resume form to PDF");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} --name <name> --email <email> --phone <phone> [options]");
    eprintln!();
    eprintln!("Fields:");
    eprintln!("  --name, --email, --phone   Required");
    eprintln!("  --summary <text>           Professional summary");
    eprintln!("  --education <text>         Education background");
    eprintln!("  --experience <text>        Work experience");
    eprintln!("  --skills <list>            Comma separated, e.g. \"Python, HTML, CSS\"");
    eprintln!("  --photo, -p <file>         Profile photo (PNG/JPEG)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --form, -f <file.json>     Load fields from a JSON object");
    eprintln!("  --sample <name>            Start from a sample ({})", samples::SAMPLE_NAMES.join(", "));
    eprintln!("  --out, -o <dir>            Output directory (default: .)");
    eprintln!("  --title, -t <title>        PDF metadata title (default: \"<name> Resume\")");
    eprintln!("  --layout-json              Print the page layout as JSON instead of a PDF");
    eprintln!("  --help                     Print this message");
}
