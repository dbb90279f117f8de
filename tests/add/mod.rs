mod add_all_files_to_staging_area;
mod add_named_files_to_staging_area;
