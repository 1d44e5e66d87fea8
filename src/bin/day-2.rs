use advent::{parse_numbers, PreconditionError};

fn main() -> anyhow::Result<()> {
    advent::init_tracing()?;
    let input = advent::read_input(2)?;
    let reports = parse_input(&input)?;
    tracing::debug!(reports = reports.len());

    let part_1 = reports.iter().filter(|report| report.is_safe()).count();
    tracing::info!(part_1);
    println!("{part_1}");

    let part_2 = reports
        .iter()
        .filter(|report| report.is_safe_with_removal())
        .count();
    tracing::info!(part_2);
    println!("{part_2}");
    Ok(())
}

const MIN_STEP: u64 = 1;
const MAX_STEP: u64 = 3;

/// One line of levels. Always holds at least two.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Report(Vec<i64>);

impl Report {
    fn new(line: usize, levels: Vec<i64>) -> Result<Self, PreconditionError> {
        if levels.len() < 2 {
            return Err(PreconditionError::ShortReport {
                line,
                len: levels.len(),
            });
        }
        Ok(Report(levels))
    }

    fn is_safe(&self) -> bool {
        levels_safe(&self.0)
    }

    /// Safe as-is, or after dropping the first level (left to right) that makes it safe.
    fn is_safe_with_removal(&self) -> bool {
        if self.is_safe() {
            return true;
        }
        let removed = (0..self.0.len()).find(|&i| {
            let levels = [&self.0[..i], &self.0[i + 1..]].concat();
            levels_safe(&levels)
        });
        tracing::trace!(report = ?self.0, ?removed);
        removed.is_some()
    }
}

/// Fewer than two levels have no steps and are trivially safe.
fn levels_safe(levels: &[i64]) -> bool {
    let [first, second, ..] = levels else {
        return true;
    };
    let increasing = second > first;
    levels.windows(2).all(|pair| {
        let diff = pair[1] - pair[0];
        diff != 0 && (diff > 0) == increasing && (MIN_STEP..=MAX_STEP).contains(&diff.unsigned_abs())
    })
}

fn parse_input(input: &str) -> anyhow::Result<Vec<Report>> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(i, line)| -> anyhow::Result<Report> {
            let levels = parse_numbers(i + 1, line)?;
            Ok(Report::new(i + 1, levels)?)
        })
        .collect()
}
