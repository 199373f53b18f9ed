use crate::collector::IconNames;
use crate::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default name of the generated declaration file
pub const OUTPUT_FILE_NAME: &str = "feather_icon_name.d.ts";

const HEADER: &str = "export type IconName =";

/// Print the collected names and write the declaration file
pub fn emit(names: &IconNames, output_path: &Path) -> Result<(), Error> {
    println!("{:?}", names.as_slice());
    write_declaration(names, output_path)
}

/// Write the `IconName` union for `names` to `output_path`, replacing any existing file
pub fn write_declaration(names: &IconNames, output_path: &Path) -> Result<(), Error> {
    let declaration = render_declaration(names);

    let file_write_error = |source| Error::FileWrite {
        source,
        path: output_path.to_path_buf(),
    };

    let file = File::create(output_path).map_err(file_write_error)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(declaration.as_bytes())
        .map_err(file_write_error)?;
    writer.flush().map_err(file_write_error)?;

    Ok(())
}

/// Render the declaration text. Stems are quoted as-is, without escaping.
pub fn render_declaration(names: &IconNames) -> String {
    let mut out = String::from(HEADER);

    for name in names {
        out.push_str(&format!("\n    | \"{}\"", name));
    }

    out.push_str("\n;\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> IconNames {
        IconNames::new(list.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_declaration(&names(&[])), "export type IconName =\n;\n");
    }

    #[test]
    fn test_render_single() {
        assert_eq!(
            render_declaration(&names(&["icon"])),
            "export type IconName =\n    | \"icon\"\n;\n"
        );
    }

    #[test]
    fn test_render_keeps_order() {
        assert_eq!(
            render_declaration(&names(&["x-circle", "activity", "zap"])),
            "export type IconName =\n    | \"x-circle\"\n    | \"activity\"\n    | \"zap\"\n;\n"
        );
    }

    #[test]
    fn test_render_does_not_escape() {
        assert_eq!(
            render_declaration(&names(&["a\"b"])),
            "export type IconName =\n    | \"a\"b\"\n;\n"
        );
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(OUTPUT_FILE_NAME);
        std::fs::write(&path, "stale content that is longer than the new file").unwrap();

        write_declaration(&names(&["icon"]), &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "export type IconName =\n    | \"icon\"\n;\n"
        );
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join(OUTPUT_FILE_NAME);

        let err = write_declaration(&names(&["icon"]), &path).unwrap_err();

        match err {
            Error::FileWrite { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("Unexpected error: {:?}", other),
        }
    }
}
