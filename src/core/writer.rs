//! Atomic CSV output.
//!
//! Every writer fills a temp file next to the target and renames it into
//! place, so a failed run never leaves a half-written CSV behind.

use serde::Serialize;
use std::{io, path::Path};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{
    core::{extract::Entry, table::Row},
    error::LeagueError,
    Result,
};

pub const ENTRY_HEADER: [&str; 4] = ["name", "team", "status", "position"];
pub const NAMES_HEADER: &str = "Player";

type CsvOut<'a> = csv::Writer<&'a mut NamedTempFile>;

fn write_atomic<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut CsvOut<'_>) -> csv::Result<()>,
{
    if path.file_name().is_none() {
        return Err(LeagueError::PathInvalid {
            path: path.display().to_string(),
            reason: "no file name".to_string(),
        });
    }

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| LeagueError::from_write(path, e))?;

    {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut tmp);
        fill(&mut wtr).map_err(|e| LeagueError::from_write(path, io::Error::from(e)))?;
        wtr.flush().map_err(|e| LeagueError::from_write(path, e))?;
    }

    tmp.as_file()
        .sync_all()
        .map_err(|e| LeagueError::from_write(path, e))?;
    tmp.persist(path)
        .map_err(|e| LeagueError::from_write(path, e.error))?;

    debug!(path = %path.display(), "wrote csv");
    Ok(())
}

/// Write extracted entries as `name,team,status,position`, input order kept.
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    write_atomic(path, |wtr| {
        wtr.write_record(ENTRY_HEADER)?;
        for e in entries {
            wtr.write_record([
                e.name.as_str(),
                e.team.as_str(),
                e.status.to_string().as_str(),
                e.position.as_str(),
            ])?;
        }
        Ok(())
    })
}

/// Single-column `Player` list.
pub fn write_names<S: AsRef<str>>(path: &Path, names: &[S]) -> Result<()> {
    write_atomic(path, |wtr| {
        wtr.write_record([NAMES_HEADER])?;
        for name in names {
            wtr.write_record([name.as_ref()])?;
        }
        Ok(())
    })
}

/// Serialize flat records under an explicit header. The header is written even
/// when `records` is empty.
pub fn write_records<T: Serialize>(path: &Path, header: &[&str], records: &[T]) -> Result<()> {
    write_atomic(path, |wtr| {
        wtr.write_record(header)?;
        for record in records {
            wtr.serialize(record)?;
        }
        Ok(())
    })
}

/// Raw rows under a header, used when the source columns pass through as-is.
pub fn write_table(path: &Path, header: &[String], rows: &[Row]) -> Result<()> {
    write_atomic(path, |wtr| {
        wtr.write_record(header)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{extract::EntryStatus, table::read_table};
    use std::fs;
    use tempfile::TempDir;

    fn entry(name: &str, team: &str) -> Entry {
        Entry::from_cell(name, team, "WR", EntryStatus::PracticeSquad).unwrap()
    }

    #[test]
    fn test_entries_round_trip() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("practice_squad_players.csv");
        let entries = vec![
            entry("Ja'Marr Chase", "Team, With Comma"),
            entry("Name \"Quoted\" Guy", "Team B"),
            entry("José María", "Team C"),
        ];

        write_entries(&out, &entries).unwrap();
        let table = read_table(&out, None).unwrap();

        assert_eq!(table.rows()[0], ENTRY_HEADER.map(String::from).to_vec());
        assert_eq!(table.len(), 4);
        for (i, e) in entries.iter().enumerate() {
            assert_eq!(table.cell(i + 1, 0), e.name);
            assert_eq!(table.cell(i + 1, 1), e.team);
            assert_eq!(table.cell(i + 1, 2), "practice-squad");
            assert_eq!(table.cell(i + 1, 3), "WR");
        }
    }

    #[test]
    fn test_empty_input_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("empty.csv");

        write_entries(&out, &[]).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "name,team,status,position\n");
    }

    #[test]
    fn test_overwrites_existing_target() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("names.csv");
        fs::write(&out, "stale contents\nmore\nand more\n").unwrap();

        write_names(&out, &["Josh Allen"]).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "Player\nJosh Allen\n");
        // Only the target remains; the temp file was renamed into place.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_directory_is_path_invalid() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("no_such_dir").join("out.csv");

        let err = write_names::<&str>(&out, &[]).unwrap_err();

        assert!(matches!(err, LeagueError::PathInvalid { .. }), "{err:?}");
        assert!(!out.exists());
    }

    #[test]
    fn test_write_records_with_explicit_header() {
        #[derive(Serialize)]
        struct Pick {
            round: u32,
            player: String,
            amount: Option<u32>,
        }

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("picks.csv");
        let picks = vec![
            Pick { round: 1, player: "Bijan Robinson".into(), amount: Some(54) },
            Pick { round: 2, player: "Jack Bech".into(), amount: None },
        ];

        write_records(&out, &["round", "player", "amount"], &picks).unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "round,player,amount\n1,Bijan Robinson,54\n2,Jack Bech,\n"
        );

        write_records::<Pick>(&out, &["round", "player", "amount"], &[]).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "round,player,amount\n");
    }

    #[test]
    fn test_write_table_keeps_columns() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("available.csv");
        let header = vec!["RK".to_string(), "PLAYER NAME".to_string(), "TEAM".to_string()];
        let rows = vec![vec!["1".to_string(), "Ashton Jeanty".to_string(), "LV".to_string()]];

        write_table(&out, &header, &rows).unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "RK,PLAYER NAME,TEAM\n1,Ashton Jeanty,LV\n"
        );
    }
}
