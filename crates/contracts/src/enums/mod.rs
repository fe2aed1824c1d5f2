pub mod catalogue_status;
