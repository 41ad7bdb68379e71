extern crate libtest_mimic;

use std::error::Error;
use std::path::{Path, PathBuf};
use std::fs;

use libtest_mimic::{Arguments, Failed, Trial};
use relaxed_json_core::{load, LoaderOptions, JsonLoader};
use relaxed_json_test_bench::events_of;

#[derive(Default)]
struct TestData {
    desc: String,
    input_json: PathBuf,
    test_event: PathBuf,
    is_error: bool,
}

fn perform_test(data: TestData) -> Result<(), Failed> {
    let input = fs::read(&data.input_json)?;
    let actual_event = events_of(&input);
    let expected_event = fs::read_to_string(&data.test_event)?;
    assert_eq!(actual_event.trim(), expected_event.trim());

    let has_error = actual_event.ends_with("\nERR");
    if has_error != data.is_error {
        return Err(format!("expected error: {}, got: {actual_event}", data.is_error).into());
    }

    // a document the tokenizer accepts loads as a sequence of its top level values
    let loader = JsonLoader::new(LoaderOptions {
        multiple_roots: true,
        ..LoaderOptions::default()
    });
    if !data.is_error {
        loader.load(&input)?;
    } else if load(&input).is_ok() {
        return Err("loader accepted malformed input".into());
    }
    Ok(())
}

fn collect_test(
    dir_name: String,
    test_dir_path: &Path,
    tests: &mut Vec<Trial>,
) -> Result<(), Box<dyn Error>> {
    let mut test_data = TestData::default();
    for entry in fs::read_dir(test_dir_path)? {
        let entry = entry?;
        let filename = entry
            .file_name()
            .into_string()
            .map_err(|name| format!("non-UTF8 string in path {name:?}"))?;
        match &*filename {
            "===" => {
                if let Ok(desc) = fs::read_to_string(entry.path()) {
                    test_data.desc = String::from(desc.trim());
                }
            }
            "in.json" => test_data.input_json = entry.path(),
            "test.event" => test_data.test_event = entry.path(),
            "error" => test_data.is_error = true,
            _ => {}
        }
    }
    let test = Trial::test(format!("{} ({})", dir_name, &test_data.desc), move || {
        perform_test(test_data)
    });
    tests.push(test);
    Ok(())
}

fn collect_tests(path: &Path) -> Result<Vec<Trial>, Box<dyn Error>> {
    let mut tests = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            let dir_name = entry
                .file_name()
                .into_string()
                .map_err(|name| format!("non-UTF8 string in path {name:?}"))?;
            collect_test(dir_name, &entry.path(), &mut tests)?;
        }
    }
    tests.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(tests)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();

    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");

    let tests = collect_tests(&path)?;

    libtest_mimic::run(&args, tests).exit();
}
