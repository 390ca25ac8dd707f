// Evlist Renderer
// Fixed-width table and quoted CSV output for a device collection

use std::borrow::Cow;
use std::fmt;

use strum_macros::{Display, EnumIter, EnumString};

use crate::collection::{ColumnWidths, InputDevices};

/// Column headers, in output order
pub const HEADERS: [&str; 5] = ["NAME", "DEVICE_PATH", "BY_ID", "BY_PATH", "CAPABILITIES"];

/// How a device collection is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Columns padded to the widest value
    #[default]
    Table,
    /// Every field double-quoted, comma separated
    Csv,
}

impl OutputFormat {
    /// One-line description used in help output
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Table => "format the output as a table",
            OutputFormat::Csv => "format the output as CSV",
        }
    }
}

/// Render a collection in its own output format.
pub fn render(devices: &InputDevices) -> String {
    devices.to_string()
}

/// Double every `"` so the value can sit inside a quoted CSV field.
pub fn csv_escape(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "\"\""))
    } else {
        Cow::Borrowed(value)
    }
}

fn write_table_row(f: &mut fmt::Formatter<'_>, widths: &ColumnWidths, row: [&str; 5]) -> fmt::Result {
    let [name, device_path, by_id, by_path, capabilities] = row;
    writeln!(
        f,
        "{name:<name_width$}{device_path:<device_width$}{by_id:<by_id_width$}{by_path:<by_path_width$}{capabilities}",
        name_width = widths.name,
        device_width = widths.device_path,
        by_id_width = widths.by_id,
        by_path_width = widths.by_path,
    )
}

fn write_csv_row(f: &mut fmt::Formatter<'_>, row: [&str; 5]) -> fmt::Result {
    let mut fields = row.iter();
    if let Some(first) = fields.next() {
        write!(f, "\"{}\"", csv_escape(first))?;
    }
    for field in fields {
        write!(f, ",\"{}\"", csv_escape(field))?;
    }
    writeln!(f)
}

impl InputDevices {
    fn write_row(&self, f: &mut fmt::Formatter<'_>, row: [&str; 5]) -> fmt::Result {
        match self.output_format() {
            OutputFormat::Table => write_table_row(f, &self.widths(), row),
            OutputFormat::Csv => write_csv_row(f, row),
        }
    }
}

impl fmt::Display for InputDevices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_row(f, HEADERS)?;
        for device in self.devices() {
            let device_path = device.device_path_str();
            let by_id = device.by_id_str();
            let by_path = device.by_path_str();
            let capabilities = device.capabilities_str();
            self.write_row(
                f,
                [
                    device.name(),
                    &device_path,
                    &by_id,
                    &by_path,
                    &capabilities,
                ],
            )?;
        }
        Ok(())
    }
}
