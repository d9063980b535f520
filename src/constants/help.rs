//! Static text shown by the command line interface

pub const PROGRAM_NAME: &str = "cpc-conf";

pub const DESCRIPTION: &str = "INI configuration file management utility.

Manages key-value pairs in INI format configuration files. Supports sections, \
automatic file creation, and both reading and writing operations.";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nINI configuration file management utility."
);

/// Short usage reminder printed to stdout after argument errors
pub const USAGE: &str = "Usage: cpc-conf get <filename> <section> <key>
       cpc-conf set <filename> <section> <key> <value>
       cpc-conf -h|--help for detailed help
       cpc-conf --version for version information";

pub const HELP_NOTES: &str = "OPTIONS:
    -h, --help     Show this help message and exit
    --version      Show version information and exit
    (options are only recognized as the sole argument)

EXAMPLES:
    cpc-conf set config.ini database host \"localhost\"
    cpc-conf set config.ini database port 5432
    cpc-conf get config.ini database host
    cpc-conf get config.ini database port

FILE FORMAT:
    [section1]
    key1=value1
    key2=value2

    [section2]
    key3=value3

NOTES:
    - If the file doesn't exist, it will be created automatically
    - If the section doesn't exist, it will be created
    - If the key already exists, its value will be updated
    - If the key doesn't exist, it will be added to the specified section
    - For 'get': Returns the value and exits with error if key/section not found
    - Section names should not include brackets in the command line";
