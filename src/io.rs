//! Loading a `Population` from comma separated family data:
//!
//! ```text
//! name,mother,father,trait
//! Harry,Lily,James,
//! James,,,1
//! Lily,,,0
//! ```
//!
//! `mother` and `father` are both blank for a founder. `trait` is `1`, `0`, or blank if unknown.

use crate::model::{Population, PopulationBuilder};
use crate::person::Person;
use crate::util::{HeredityError, Result};

use log::debug;

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const COLUMNS: [&str; 4] = ["name", "mother", "father", "trait"];


/// Read and validate a `Population` from the file at `path`
pub fn load_population<P: AsRef<Path>>(path: P) -> Result<Population> {
    let file = File::open(path.as_ref())?;
    debug!("loading population from {}", path.as_ref().display());
    parse_population(file)
}


/// Read and validate a `Population` from `reader`
///
/// # Errors
/// * `HeredityError::Parse` if the header or a row is malformed
/// * `HeredityError::IncompleteParents` if a row has only one of mother and father
/// * any error from `PopulationBuilder::build`
pub fn parse_population<R: Read>(reader: R) -> Result<Population> {
    let mut lines = BufReader::new(reader).lines().enumerate();

    let columns = match lines.next() {
        Some((_, header)) => column_order(&header?)?,
        None => return Err(HeredityError::Parse { line: 1, reason: String::from("missing header") })
    };

    let mut builder = PopulationBuilder::new();
    for (i, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        builder = builder.with_person(parse_row(&line, &columns, i + 1)?);
    }

    builder.build()
}


/// Position of each of `COLUMNS` in the header
fn column_order(header: &str) -> Result<[usize; 4]> {
    let fields: Vec<&str> = header.split(',').map(|f| f.trim()).collect();
    let mut order = [0; 4];

    for (slot, column) in order.iter_mut().zip(COLUMNS.iter()) {
        *slot = fields.iter().position(|f| f == column).ok_or_else(|| HeredityError::Parse {
            line: 1,
            reason: format!("header is missing the {} column", column)
        })?;
    }

    Ok(order)
}


fn parse_row(line: &str, columns: &[usize; 4], line_no: usize) -> Result<Person> {
    let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
    let field = |i: usize| fields.get(columns[i]).cloned().unwrap_or("");

    let name = field(0);
    if name.is_empty() {
        return Err(HeredityError::Parse { line: line_no, reason: String::from("missing name") });
    }

    let observed = match field(3) {
        "" => None,
        "1" => Some(true),
        "0" => Some(false),
        other => return Err(HeredityError::Parse {
            line: line_no,
            reason: format!("trait must be 1, 0, or blank, found {}", other)
        })
    };

    let person = match (field(1), field(2)) {
        ("", "") => Person::founder(name),
        (mother, father) if ! mother.is_empty() && ! father.is_empty() => {
            Person::child(name, mother, father)
        },
        _ => return Err(HeredityError::IncompleteParents(String::from(name)))
    };

    Ok(person.with_trait(observed))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Observeable;

    use std::io::Write;

    const FAMILY0: &str = "name,mother,father,trait\nHarry,Lily,James,\nJames,,,1\nLily,,,0\n";

    #[test]
    fn parse() {
        let population = parse_population(FAMILY0.as_bytes()).unwrap();
        assert_eq!(3, population.len());

        let harry = population.get("Harry").unwrap();
        assert_eq!(Some("Lily"), harry.mother());
        assert_eq!(Some("James"), harry.father());
        assert_eq!(None, harry.observation());

        assert_eq!(Some(true), population.get("James").unwrap().observation());
        assert_eq!(Some(false), population.get("Lily").unwrap().observation());
        assert!(population.get("Lily").unwrap().is_founder());
    }

    #[test]
    fn column_order_and_blank_lines() {
        let data = "trait,name,father,mother\n,Harry,James,Lily\n\n1,James,,\r\n0,Lily,,\n";
        let population = parse_population(data.as_bytes()).unwrap();

        let harry = population.get("Harry").unwrap();
        assert_eq!(Some("Lily"), harry.mother());
        assert_eq!(Some("James"), harry.father());
        assert_eq!(Some(true), population.get("James").unwrap().observation());
    }

    #[test]
    fn bad_header() {
        let err = parse_population("name,mother,trait\n".as_bytes()).unwrap_err();
        assert_eq!(
            HeredityError::Parse { line: 1, reason: String::from("header is missing the father column") },
            err
        );

        assert!(parse_population("".as_bytes()).is_err());
    }

    #[test]
    fn bad_trait() {
        let err = parse_population("name,mother,father,trait\nLily,,,yes\n".as_bytes()).unwrap_err();
        match err {
            HeredityError::Parse { line, .. } => assert_eq!(2, line),
            _ => panic!("expected a parse error")
        }
    }

    #[test]
    fn one_parent() {
        let err = parse_population("name,mother,father,trait\nLily,,,\nHarry,Lily,,\n".as_bytes()).unwrap_err();
        assert_eq!(HeredityError::IncompleteParents(String::from("Harry")), err);
        assert!(err.is_invalid_population());
    }

    #[test]
    fn unknown_parent() {
        let err = parse_population("name,mother,father,trait\nHarry,Lily,James,\n".as_bytes()).unwrap_err();
        assert!(err.is_invalid_population());
    }

    #[test]
    fn load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FAMILY0.as_bytes()).unwrap();

        let population = load_population(file.path()).unwrap();
        assert_eq!(3, population.len());

        match load_population(file.path().with_extension("missing")) {
            Err(HeredityError::Io(_)) => (),
            _ => panic!("expected an i/o error")
        }
    }

}
