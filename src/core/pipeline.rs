use crate::core::{
    ConfigProvider, Pipeline, SolutionDoc, Storage, SubmissionRow, TransformResult,
};
use crate::utils::error::{ConvertError, Result};
use crate::utils::format::{guarded_decimal, row_id};
use crate::utils::validation::Validate;

pub struct SubmissionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SubmissionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SubmissionPipeline<S, C> {
    fn extract(&self) -> Result<SolutionDoc> {
        tracing::debug!("Reading solution from: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path())?;

        let doc: SolutionDoc = serde_json::from_slice(&raw)?;
        doc.validate()?;

        // Diagnostic echo of the parsed document, not part of the contract.
        tracing::debug!("Parsed solution document: {:?}", doc);

        Ok(doc)
    }

    fn transform(&self, doc: SolutionDoc) -> Result<TransformResult> {
        let demand = doc.demand().ok_or_else(|| ConvertError::DocumentError {
            message: "The document contains no item specs ('items' is empty)".to_string(),
        })?;

        let opts = self.config.format_options();
        let scale = self.config.scale()?;

        let placed_items = &doc.solution.layout.placed_items;
        let mut rows = Vec::with_capacity(placed_items.len());

        for (index, item) in placed_items.iter().enumerate() {
            let transform = &item.transformation;

            // Only the translation is scaled; rotation passes through as-is.
            let x = transform.translation[0].checked_div(scale).ok_or_else(|| {
                ConvertError::ProcessingError {
                    message: format!("Scaling x of row {} by {} failed", index, scale),
                }
            })?;
            let y = transform.translation[1].checked_div(scale).ok_or_else(|| {
                ConvertError::ProcessingError {
                    message: format!("Scaling y of row {} by {} failed", index, scale),
                }
            })?;

            rows.push(SubmissionRow {
                id: row_id(demand, index, opts.id_pad_width),
                x: guarded_decimal(x, &opts),
                y: guarded_decimal(y, &opts),
                deg: guarded_decimal(transform.rotation, &opts),
            });
        }

        let csv_output = render_csv(&rows)?;
        tracing::debug!("Formatted submission table:\n{}", csv_output);

        Ok(TransformResult { rows, csv_output })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let file_name = self.config.file_name();

        tracing::debug!(
            "Writing {} bytes to {}",
            result.csv_output.len(),
            file_name
        );
        self.storage
            .write_file(file_name, result.csv_output.as_bytes())?;

        Ok(format!("{}/{}", self.config.output_path(), file_name))
    }
}

/// Renders the submission table. The header is written explicitly so it is
/// present even for a zero-demand document.
fn render_csv(rows: &[SubmissionRow]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(["id", "x", "y", "deg"])?;
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConvertError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })?;

    String::from_utf8(bytes).map_err(|e| ConvertError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
