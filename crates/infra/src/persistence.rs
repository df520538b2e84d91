pub mod file_writer;
pub mod report_sink;

pub use file_writer::FileWriter;
pub use report_sink::FsReportSink;
