//! Interactive driver for `ArenaTable`.
//!
//! Line commands: `SET key value`, `GET key`, `DEL key`, `PRINT filename`,
//! `HELP`, `END`. Values are integers. Commands are split on whitespace into
//! at most three fields; anything past the third field is ignored.

use std::fs::File;
use std::io::{self, BufRead, Write};

use arenatable::ArenaTable;

const MAX_FIELDS: usize = 3;

fn print_help() {
    println!("Use SET [KEY] [VALUE] to set a value in the hashmap, where [VALUE] is an <integer>.");
    println!("Use GET [KEY] to get a value in the hashmap.");
    println!("Use DEL [KEY] to delete a value in the hashmap.");
    println!("Use PRINT [FILENAME] to write the content of the hashmap to a file.");
    println!("Use HELP to review these instructions.");
    println!("Use END to end the program.");
}

/// Split into whitespace-delimited fields, capped at [`MAX_FIELDS`];
/// anything past the cap is dropped.
fn parse_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().take(MAX_FIELDS).collect()
}

fn read_size(stdin: &mut impl BufRead) -> io::Result<usize> {
    print!("Size of the HT? ");
    io::stdout().flush()?;

    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim().parse().unwrap_or(32))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut stdin = io::stdin().lock();
    let size = read_size(&mut stdin)?;

    let mut table: ArenaTable<i64> = ArenaTable::with_capacity(size);
    let mut inserted: Vec<String> = Vec::new();
    println!("Hashtable is a go!");

    print_help();
    println!();

    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let fields = parse_fields(&line);
        if fields.is_empty() {
            continue;
        }

        let mut error = false;
        match fields[0] {
            "SET" => {
                if fields.len() >= 3 {
                    let key = fields[1];
                    match fields[2].parse::<i64>() {
                        Ok(value) => match table.insert(key, value) {
                            Ok(_) => {
                                inserted.push(key.to_string());
                                println!(
                                    "Your value [{value}] has been paired with the key [{key}]."
                                );
                            }
                            Err(_) => println!(
                                "Failed to pair the value [{value}] with the key [{key}]."
                            ),
                        },
                        Err(_) => error = true,
                    }
                } else {
                    error = true;
                }
            }
            "GET" => {
                if fields.len() >= 2 {
                    let key = fields[1];
                    match table.get(key) {
                        Some(value) => {
                            println!("Found a value of [{value}] for the key [{key}].")
                        }
                        None => println!("No value found for the key [{key}]."),
                    }
                } else {
                    error = true;
                }
            }
            "DEL" => {
                if fields.len() >= 2 {
                    let key = fields[1];
                    match table.remove(key) {
                        Some(value) => println!(
                            "Successfully removed the key [{key}] with a value of [{value}]."
                        ),
                        None => println!("Failed to remove the key [{key}]."),
                    }
                } else {
                    error = true;
                }
            }
            "PRINT" => {
                if fields.len() >= 2 {
                    let mut file = File::create(fields[1])?;
                    table.dump(&mut file)?;
                    println!("Printed the Hashtable to the file [{}].", fields[1]);
                } else {
                    error = true;
                }
            }
            "HELP" => print_help(),
            "END" => break,
            _ => error = true,
        }

        if error {
            println!("Didn't understand your command there.");
        }
        println!();
    }

    // Drain everything we put in, reporting what was still held.
    println!("Cleaning up hashtable...");
    for key in &inserted {
        if let Some(value) = table.remove(key) {
            println!("Cleaning an entry for [{key}] with a value of [{value}].");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_fields() {
        assert_eq!(parse_fields("SET k 5"), vec!["SET", "k", "5"]);
    }

    #[test]
    fn test_parse_drops_extra_fields() {
        // the cap keeps the third token intact and discards the rest
        assert_eq!(parse_fields("SET k 5 extra junk"), vec!["SET", "k", "5"]);
        assert_eq!(parse_fields("SET k 5 extra")[2].parse::<i64>(), Ok(5));
    }

    #[test]
    fn test_parse_blank_lines() {
        assert!(parse_fields("").is_empty());
        assert!(parse_fields("   \t  ").is_empty());
    }

    #[test]
    fn test_parse_short_commands() {
        assert_eq!(parse_fields("HELP"), vec!["HELP"]);
        assert_eq!(parse_fields("GET k"), vec!["GET", "k"]);
        // SET with a missing value stays two fields; main treats it as an error
        assert_eq!(parse_fields("SET k").len(), 2);
    }

    #[test]
    fn test_parse_collapses_whitespace_runs() {
        assert_eq!(parse_fields("  SET   k\t9  "), vec!["SET", "k", "9"]);
    }
}
