use crate::core::scanner::Scanner;
use crate::domain::model::{TestCase, Verdict};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Counters for one run, used for logging only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cases: u64,
    pub accepted: u64,
    pub rejected: u64,
}

/// Reads `T` followed by `T` triples and writes one verdict line per triple.
pub struct InputProcessor<R, W> {
    scanner: Scanner<R>,
    writer: W,
}

impl<R: BufRead, W: Write> InputProcessor<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            scanner: Scanner::new(reader),
            writer,
        }
    }

    /// Processes the whole input. The writer is flushed on both success and
    /// failure, so verdicts for completed cases are never lost.
    pub fn run(&mut self) -> Result<RunSummary> {
        let result = self.process();
        let flushed = self.writer.flush();
        let summary = result?;
        flushed?;
        Ok(summary)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn process(&mut self) -> Result<RunSummary> {
        let count: i64 = self.scanner.next("number of test cases")?;
        if count < 0 {
            tracing::warn!("Negative test case count {}, nothing to process", count);
        }
        tracing::info!("Processing {} test cases", count.max(0));

        let mut summary = RunSummary::default();
        for index in 1..=count {
            let case = self.read_case(index)?;
            let verdict = case.verdict();
            tracing::debug!(
                "Case {}: x={} y={} z={} -> {}",
                index,
                case.x,
                case.y,
                case.z,
                verdict
            );

            writeln!(self.writer, "{}", verdict)?;

            summary.cases += 1;
            match verdict {
                Verdict::Yes => summary.accepted += 1,
                Verdict::No => summary.rejected += 1,
            }
        }

        Ok(summary)
    }

    fn read_case(&mut self, index: i64) -> Result<TestCase> {
        let x = self.scanner.next(&format!("X of test case {}", index))?;
        let y = self.scanner.next(&format!("Y of test case {}", index))?;
        let z = self.scanner.next(&format!("Z of test case {}", index))?;
        Ok(TestCase::new(x, y, z))
    }
}
