use crate::document::Document;
use crate::error::Result;
use crate::OutputFormat;

/// Compact JSON: an array holding one array of strings per record.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct JsonOpts;

impl OutputFormat for JsonOpts {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn encode(&self, document: &Document) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(document)?)
    }
}
