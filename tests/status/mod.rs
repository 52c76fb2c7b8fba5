mod list_untracked_files_in_name_order;
mod print_nothing_when_no_files_are_changed;
mod report_changes_in_long_format;
