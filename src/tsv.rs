use std::io::Read;

use csv::ReaderBuilder;
use tracing::{info, warn};

use crate::document::{align, is_empty_row, AlignPolicy, Document};
use crate::error::Result;
use crate::InputFormat;

const DELIMITER: u8 = b'\t';

/// Tab-delimited input with a header line.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct TsvOpts {
    #[arg(skip)]
    policy: AlignPolicy,
}

impl TsvOpts {
    pub fn with_policy(policy: AlignPolicy) -> Self {
        TsvOpts { policy }
    }
}

impl InputFormat for TsvOpts {
    fn read_document<R: Read>(&self, input: R) -> Result<Document> {
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let arity = reader.headers()?.len();
        let mut document = Document::new();

        for (index, row) in reader.records().enumerate() {
            let row = row?;
            if is_empty_row(&row) {
                warn!("Empty row: {}", index);
                continue;
            }
            document.push(align(&row, arity, self.policy, index)?);
        }

        info!("{} records parsed", document.len());
        Ok(document)
    }
}
