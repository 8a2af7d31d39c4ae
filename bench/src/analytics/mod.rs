pub mod report_builder;
