use std::io::Write;

use anyhow::Result;

/// How a library list is written for the calling build system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One entry per line
    #[default]
    Lines,
    /// `cargo:rustc-link-arg=` directives for a build script
    Cargo,
    /// A JSON array of strings
    Json,
}

/// Write `entries` to `out`. An empty list writes nothing, except in JSON
/// where it is `[]`.
pub fn write_entries<W: Write>(out: &mut W, entries: &[String], format: Format) -> Result<()> {
    match format {
        Format::Lines => {
            for entry in entries {
                writeln!(out, "{entry}")?;
            }
        }
        Format::Cargo => {
            for entry in entries {
                writeln!(out, "cargo:rustc-link-arg={entry}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(entries: &[&str], format: Format) -> String {
        let entries: Vec<String> = entries.iter().map(|s| s.to_string()).collect();
        let mut buf = Vec::new();
        write_entries(&mut buf, &entries, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_lines() {
        assert_eq!(
            render(&["libLLVMCore.a", "libLLVMSupport.a"], Format::Lines),
            "libLLVMCore.a\nlibLLVMSupport.a\n"
        );
    }

    #[test]
    fn test_cargo() {
        assert_eq!(
            render(&["/usr/lib/x86_64-linux-gnu/libz.so"], Format::Cargo),
            "cargo:rustc-link-arg=/usr/lib/x86_64-linux-gnu/libz.so\n"
        );
    }

    #[test]
    fn test_json() {
        let out = render(&["libLLVMCore.a", "libLLVMSupport.a"], Format::Json);
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, ["libLLVMCore.a", "libLLVMSupport.a"]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(&[], Format::Lines), "");
        assert_eq!(render(&[], Format::Cargo), "");
        assert_eq!(render(&[], Format::Json), "[]\n");
    }
}
