use std::collections::HashSet;
use std::path::Path;

use crate::input::{InputError, ResultRecord, list_result_files, pack_ipv4, read_result_file};
use crate::model::buckets::ScoreBuckets;

pub fn build_malicious_set(tag: &str, addrs: &[String]) -> Result<HashSet<u32>, InputError> {
    let mut set = HashSet::with_capacity(addrs.len());
    for addr in addrs {
        let packed = pack_ipv4(addr).ok_or_else(|| InputError::InvalidAddress {
            tag: tag.to_string(),
            addr: addr.clone(),
        })?;
        set.insert(packed);
    }
    Ok(set)
}

pub fn aggregate_records(
    malicious: &HashSet<u32>,
    records: &[ResultRecord],
    buckets: &mut ScoreBuckets,
) {
    for record in records {
        let abnormal = record
            .address()
            .is_some_and(|addr| malicious.contains(&addr));
        buckets.push(abnormal, record.score(), record.count());
    }
}

/// Reads every result file of `tag` under `results_root` into score buckets.
pub fn run_stage1(
    results_root: &Path,
    tag: &str,
    addrs: &[String],
) -> Result<ScoreBuckets, InputError> {
    let malicious = build_malicious_set(tag, addrs)?;
    let dir = results_root.join(tag);
    tracing::info!("Read files from: {}", dir.display());

    let mut buckets = ScoreBuckets::new();
    for path in list_result_files(&dir)? {
        let file = read_result_file(&path)?;
        tracing::debug!("{}: {} records", path.display(), file.results.len());
        aggregate_records(&malicious, &file.results, &mut buckets);
    }

    tracing::info!(
        "Normal packets: {}, Abnormal packets: {}.",
        buckets.normal.len(),
        buckets.abnormal.len()
    );
    Ok(buckets)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_aggregate.rs"]
mod tests;
