use crate::domain::model::{FormatOptions, SolutionDoc, TransformResult};
use crate::utils::error::Result;
use rust_decimal::Decimal;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn file_name(&self) -> &str;
    /// Divisor applied to translation coordinates before rounding. Fallible
    /// because providers keep the configured text form.
    fn scale(&self) -> Result<Decimal>;
    fn format_options(&self) -> FormatOptions;
}

pub trait Pipeline {
    fn extract(&self) -> Result<SolutionDoc>;
    fn transform(&self, doc: SolutionDoc) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
