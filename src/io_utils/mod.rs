pub mod temporary_file;
