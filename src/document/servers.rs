//! Server list mutations.

use serde_yaml::{Mapping, Value};

use super::Document;

/// Top-level key holding the server list.
pub const SERVERS_KEY: &str = "servers";

const URL_KEY: &str = "url";

impl Document {
    /// Prepend `{url: <server_url>}` to the server list.
    ///
    /// The most recently added URL becomes the first entry, which Swagger UI
    /// treats as the default server. Existing entries keep only their `url`
    /// field; entries without one are dropped. A missing or non-sequence
    /// `servers` value is treated as empty.
    pub fn add_server_url(&mut self, server_url: &str) {
        let existing = match self.root.get_mut(SERVERS_KEY) {
            Some(Value::Sequence(entries)) => std::mem::take(entries),
            _ => Vec::new(),
        };

        let mut servers = Vec::with_capacity(existing.len() + 1);
        servers.push(server_entry(Value::from(server_url)));
        servers.extend(existing.into_iter().filter_map(|entry| match entry {
            Value::Mapping(mut mapping) => mapping.remove(URL_KEY).map(server_entry),
            _ => None,
        }));

        self.root
            .insert(Value::from(SERVERS_KEY), Value::Sequence(servers));
    }

    /// Replace the server list with an empty one.
    pub fn remove_server_urls(&mut self) {
        self.root
            .insert(Value::from(SERVERS_KEY), Value::Sequence(Vec::new()));
    }

    /// URLs of the server list entries, in order.
    ///
    /// Entries whose `url` is missing or not a string are skipped.
    pub fn servers(&self) -> Vec<&str> {
        match self.root.get(SERVERS_KEY) {
            Some(Value::Sequence(entries)) => entries
                .iter()
                .filter_map(|entry| entry.get(URL_KEY)?.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn server_entry(url: Value) -> Value {
    let mut entry = Mapping::new();
    entry.insert(Value::from(URL_KEY), url);
    Value::Mapping(entry)
}
