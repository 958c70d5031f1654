
use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("flowscore_results_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_parse_result_records() {
    let file: ResultFile =
        serde_json::from_str(r#"{"Results": [[16909060, 7.5, 3], [1, 2, 0]]}"#).unwrap();
    assert_eq!(file.results.len(), 2);
    assert_eq!(file.results[0].address(), Some(16_909_060));
    assert_eq!(file.results[0].score(), 7.5);
    assert_eq!(file.results[0].count(), 3);
    assert_eq!(file.results[1].score(), 2.0);
}

#[test]
fn test_negative_count_and_wide_address_decode() {
    let file: ResultFile =
        serde_json::from_str(r#"{"Results": [[5000000000, 1.0, -3], [-1, 2.0, 2]]}"#).unwrap();
    assert_eq!(file.results[0].address(), None);
    assert_eq!(file.results[0].count(), 0);
    assert_eq!(file.results[1].address(), None);
    assert_eq!(file.results[1].count(), 2);
}

#[test]
fn test_missing_results_key() {
    let dir = make_temp_dir();
    let path = dir.join("bad.json");
    std::fs::write(&path, r#"{"Other": []}"#).unwrap();
    assert!(matches!(
        read_result_file(&path),
        Err(InputError::Json { .. })
    ));
}

#[test]
fn test_malformed_record() {
    let dir = make_temp_dir();
    let path = dir.join("bad.json");
    std::fs::write(&path, r#"{"Results": [[1, 2.0]]}"#).unwrap();
    assert!(read_result_file(&path).is_err());
}

#[test]
fn test_list_result_files_sorted() {
    let dir = make_temp_dir();
    for name in ["b.json", "a.json", "c.json"] {
        std::fs::write(dir.join(name), r#"{"Results": []}"#).unwrap();
    }
    let files = list_result_files(&dir).unwrap();
    let names = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
}

#[test]
fn test_list_missing_dir() {
    let dir = make_temp_dir().join("absent");
    assert!(matches!(
        list_result_files(&dir),
        Err(InputError::Io { .. })
    ));
}
