mod file_list_tests;
mod plain_tests;
