pub mod a001_record;
