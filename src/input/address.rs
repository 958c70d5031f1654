use std::net::Ipv4Addr;
use std::path::Path;

use serde_json::{Map, Value};

use crate::input::{ALL_TARGETS, InputError};

/// Tag → malicious address strings, in file order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: Vec<(String, Vec<String>)>,
}

impl AddressBook {
    fn find(&self, tag: &str) -> Option<(&str, &[String])> {
        self.entries
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(name, addrs)| (name.as_str(), addrs.as_slice()))
    }

    /// Resolves a `--target` value to the tags to analyze.
    ///
    /// `ALL` yields every tag whose name is not purely numeric; any other value must
    /// name an existing tag.
    pub fn select(&self, target: &str) -> Result<Vec<(&str, &[String])>, InputError> {
        if target == ALL_TARGETS {
            return Ok(self
                .entries
                .iter()
                .filter(|(name, _)| !is_numeric_tag(name))
                .map(|(name, addrs)| (name.as_str(), addrs.as_slice()))
                .collect());
        }
        match self.find(target) {
            Some(entry) => Ok(vec![entry]),
            None => Err(InputError::TargetNotFound(target.to_string())),
        }
    }
}

/// Non-empty and made only of Unicode numeric characters (`"123"`, `"١٢"`, `"²"`).
pub fn is_numeric_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(char::is_numeric)
}

pub fn load_address_book(path: &Path) -> Result<AddressBook, InputError> {
    let text = std::fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
    parse_address_book(&text, path)
}

pub(crate) fn parse_address_book(text: &str, path: &Path) -> Result<AddressBook, InputError> {
    let root: Map<String, Value> =
        serde_json::from_str(text).map_err(|e| InputError::json(path, e))?;

    let mut entries = Vec::with_capacity(root.len());
    for (tag, value) in root {
        let addrs: Vec<String> =
            serde_json::from_value(value).map_err(|e| InputError::InvalidAddressBook {
                path: path.to_path_buf(),
                msg: format!("tag {tag}: {e}"),
            })?;
        entries.push((tag, addrs));
    }

    Ok(AddressBook { entries })
}

/// Network-order (big-endian) integer form of a dotted-quad address.
pub fn pack_ipv4(addr: &str) -> Option<u32> {
    addr.trim().parse::<Ipv4Addr>().ok().map(u32::from)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/address.rs"]
mod tests;
