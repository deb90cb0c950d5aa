//! This module reads the rows of a group from delimiter separated files
//! into a [MemoryStorage].

use std::{fs::File, io::Read, path::Path};

use algebra_physical::{
    datavalues::{Row, Value},
    management::{id::GroupId, storage::MemoryStorage},
};
use csv::{Reader, ReaderBuilder};

use crate::error::Error;

/// Wrap an arbitrary [Read] into a headerless csv [Reader]
fn csv_reader<R: Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .double_quote(true)
        .flexible(true)
        .from_reader(reader)
}

/// Read all records of `reader` and store them as the rows of `group`.
///
/// Every field is interpreted by [Value::parse_field].
/// An existing group of the same name is replaced.
/// Returns the number of imported rows.
pub fn import_group<R: Read>(
    storage: &mut MemoryStorage,
    group: GroupId,
    reader: R,
) -> Result<usize, Error> {
    let mut rows = Vec::<Row>::new();

    for record in csv_reader(reader).records() {
        let record = record?;
        rows.push(record.iter().map(Value::parse_field).collect());
    }

    let count = rows.len();
    log::info!("imported {count} rows into group {group}");
    storage.add_group(group, rows);

    Ok(count)
}

/// Read the file at `path` into `group`, see [import_group].
pub fn import_group_file(
    storage: &mut MemoryStorage,
    group: GroupId,
    path: &Path,
) -> Result<usize, Error> {
    let file = File::open(path).map_err(|error| Error::IOReading {
        error,
        filename: path.display().to_string(),
    })?;

    import_group(storage, group, file)
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use algebra_physical::{
        datavalues::Value,
        management::{
            id::GroupId,
            storage::{GroupStorage, MemoryStorage},
        },
    };
    use assert_fs::{prelude::*, TempDir};
    use test_log::test;

    use crate::error::Error;

    use super::{import_group, import_group_file};

    #[test]
    fn import_rows() {
        let data = "1,ann,30\n2,\"bob, jr\",\n3,cid,true\n";
        let mut storage = MemoryStorage::new();

        let count = import_group(&mut storage, GroupId::new("orders"), data.as_bytes()).unwrap();
        assert_eq!(count, 3);

        let rows: Vec<_> = storage.scan(&GroupId::new("orders")).unwrap().collect();
        assert_eq!(
            rows,
            vec![
                vec![Value::Integer(1), Value::from("ann"), Value::Integer(30)],
                vec![Value::Integer(2), Value::from("bob, jr"), Value::Null],
                vec![Value::Integer(3), Value::from("cid"), Value::Boolean(true)],
            ]
        );
    }

    #[test]
    fn import_ragged_rows() {
        let data = "1\n2,3\n";
        let mut storage = MemoryStorage::new();

        import_group(&mut storage, GroupId::new("ragged"), data.as_bytes()).unwrap();

        let rows: Vec<_> = storage.scan(&GroupId::new("ragged")).unwrap().collect();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn import_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.child("items.csv");
        file.write_str("apple,3\npear,\n").unwrap();

        let mut storage = MemoryStorage::new();
        let count = import_group_file(&mut storage, GroupId::new("items"), file.path()).unwrap();
        assert_eq!(count, 2);

        let rows: Vec<_> = storage.scan(&GroupId::new("items")).unwrap().collect();
        assert_eq!(
            rows,
            vec![
                vec![Value::from("apple"), Value::Integer(3)],
                vec![Value::from("pear"), Value::Null],
            ]
        );

        temp_dir.close().unwrap();
    }

    #[test]
    fn import_missing_file() {
        let mut storage = MemoryStorage::new();
        let result = import_group_file(
            &mut storage,
            GroupId::new("orders"),
            Path::new("this/file/does/not/exist.csv"),
        );

        assert!(matches!(result, Err(Error::IOReading { .. })));
        assert_eq!(storage.num_groups(), 0);
    }
}
