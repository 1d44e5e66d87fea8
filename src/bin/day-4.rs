use advent::{
    grid::{Direction, Position, DIRECTIONS, DOWN_LEFT, DOWN_RIGHT, UP_LEFT, UP_RIGHT},
    Grid,
};
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const XMAS: &str = "XMAS";
const MAS: [char; 3] = ['M', 'A', 'S'];

fn main() -> anyhow::Result<()> {
    advent::init_tracing()?;
    let input = advent::read_input(4)?;
    let grid = Grid::parse(&input)?;
    tracing::debug!(rows = grid.rows(), cols = grid.cols());

    let part_1 = part_1(&grid)?;
    tracing::info!(part_1);
    println!("{part_1}");

    let part_2 = part_2(&grid)?;
    tracing::info!(part_2);
    println!("{part_2}");
    Ok(())
}

/// Runs `count` over every row inside a span that ticks a progress bar per row.
fn scan_rows(
    name: &'static str,
    grid: &Grid<char>,
    count: impl Fn(usize, &[char]) -> usize,
) -> anyhow::Result<usize> {
    let span = tracing::info_span!("scan", pattern = name);
    span.pb_set_style(&ProgressStyle::default_bar().template("{elapsed} {bar} {pos:>7}/{len:7}")?);
    span.pb_set_length(grid.rows() as u64);
    let _span = span.enter();

    let total = grid
        .row_iter()
        .enumerate()
        .map(|(y, row)| {
            Span::current().pb_inc(1);
            count(y, row)
        })
        .sum();
    Ok(total)
}

fn part_1(grid: &Grid<char>) -> anyhow::Result<usize> {
    scan_rows("xmas", grid, |y, row| {
        row.iter()
            .enumerate()
            .filter(|(_, c)| XMAS.starts_with(**c))
            .map(|(x, _)| count_word_at(grid, (y, x), XMAS))
            .sum()
    })
}

fn part_2(grid: &Grid<char>) -> anyhow::Result<usize> {
    scan_rows("x-mas", grid, |y, row| {
        row.iter()
            .enumerate()
            .filter(|(_, c)| **c == MAS[1])
            .filter(|(x, _)| is_cross_at(grid, (y, *x), &MAS))
            .count()
    })
}

/// Number of directions in which `word` reads straight out from `start`.
fn count_word_at(grid: &Grid<char>, start: Position, word: &str) -> usize {
    let Some(last) = word.chars().count().checked_sub(1) else {
        return 0;
    };
    DIRECTIONS
        .iter()
        .filter(|&&dir| grid.step(start, dir, last).is_some())
        .filter(|&&dir| {
            word.chars().enumerate().all(|(i, c)| {
                grid.step(start, dir, i)
                    .is_some_and(|pos| grid[pos] == c)
            })
        })
        .count()
}

/// Both diagonals through `center` spell `pattern`, each either way round.
fn is_cross_at(grid: &Grid<char>, center: Position, pattern: &[char; 3]) -> bool {
    let diagonal = |from: Direction, to: Direction| -> Option<[char; 3]> {
        Some([
            grid[grid.step(center, from, 1)?],
            grid[center],
            grid[grid.step(center, to, 1)?],
        ])
    };
    let reversed = [pattern[2], pattern[1], pattern[0]];
    [(UP_LEFT, DOWN_RIGHT), (DOWN_LEFT, UP_RIGHT)]
        .into_iter()
        .all(|(from, to)| {
            diagonal(from, to).is_some_and(|cells| cells == *pattern || cells == reversed)
        })
}
