use super::{GenerationReport, ReportSink};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Writes one human-readable block per generation to a log file.
///
/// The first successful publish truncates (or creates) the file; every
/// later publish appends. The first-write flag belongs to the writer,
/// not the engine, so an engine restart keeps appending to the same
/// session log; only a fresh writer truncates again.
#[derive(Debug)]
pub struct FileReportWriter {
    path: PathBuf,
    truncate_next: bool,
}

impl FileReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            truncate_next: true,
        }
    }
}

impl ReportSink for FileReportWriter {
    fn publish(&mut self, report: &GenerationReport) -> Result<(), anyhow::Error> {
        let mut file = if self.truncate_next {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&self.path)?
        } else {
            OpenOptions::new().create(true).append(true).open(&self.path)?
        };

        write!(file, "{report}")?;

        // Flips only after a successful write; a failed first publish
        // retries with truncation.
        self.truncate_next = false;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Individual, SpeedFitness};

    fn report(generation: u32, speeds: &[i64]) -> GenerationReport {
        let members: Vec<Individual> =
            speeds.iter().map(|&speed| Individual::new(speed)).collect();
        GenerationReport::new(generation, &members, &SpeedFitness)
    }

    #[test]
    fn first_publish_truncates_existing_content() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("log.txt");
        std::fs::write(&path, "stale content\n").expect("seed file");

        let mut writer = FileReportWriter::new(path.clone());
        writer.publish(&report(1, &[2])).expect("publish");

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(contents, "Generation: 1\nIndividual 1: speed = 2, fitness = 2\n\n");
    }

    #[test]
    fn later_publishes_append() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("log.txt");

        let mut writer = FileReportWriter::new(path.clone());
        writer.publish(&report(1, &[2])).expect("publish");
        writer.publish(&report(2, &[3])).expect("publish");

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(
            contents,
            "Generation: 1\nIndividual 1: speed = 2, fitness = 2\n\n\
             Generation: 2\nIndividual 1: speed = 3, fitness = 3\n\n"
        );
    }

    #[test]
    fn failed_first_publish_retries_with_truncation() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("no-such-dir").join("log.txt");

        let mut writer = FileReportWriter::new(missing);
        assert!(writer.publish(&report(1, &[2])).is_err());

        // The flag must still be armed for truncation.
        assert!(writer.truncate_next);
    }
}
