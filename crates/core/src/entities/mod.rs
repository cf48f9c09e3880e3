pub mod edi_records;
