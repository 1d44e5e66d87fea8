use std::collections::HashMap;

use advent::{parse_numbers, zip, ParseError};

fn main() -> anyhow::Result<()> {
    advent::init_tracing()?;
    let input = advent::read_input(1)?;
    let lists = parse_input(&input)?;
    tracing::debug!(rows = lists.left.len());

    let part_1 = total_distance(&lists);
    tracing::info!(part_1);
    println!("{part_1}");

    let part_2 = similarity_score(&lists);
    tracing::info!(part_2);
    println!("{part_2}");
    Ok(())
}

/// Two index-aligned columns, one element per input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

fn parse_input(input: &str) -> Result<Lists, ParseError> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(i, line)| parse_line(i + 1, line))
        .try_fold(Lists::default(), |mut lists, pair| {
            let (a, b) = pair?;
            lists.left.push(a);
            lists.right.push(b);
            Ok(lists)
        })
}

fn parse_line(line: usize, text: &str) -> Result<(i64, i64), ParseError> {
    match parse_numbers(line, text)?.as_slice() {
        &[a, b] => Ok((a, b)),
        fields => Err(ParseError::FieldCount {
            line,
            expected: 2,
            found: fields.len(),
        }),
    }
}

fn total_distance(Lists { left, right }: &Lists) -> u64 {
    let mut left = left.clone();
    let mut right = right.clone();
    left.sort_unstable();
    right.sort_unstable();
    zip(&left, &right).map(|(a, b)| a.abs_diff(*b)).sum()
}

fn similarity_score(Lists { left, right }: &Lists) -> i64 {
    let frequency: HashMap<i64, i64> = right.iter().fold(HashMap::new(), |mut acc, el| {
        *acc.entry(*el).or_default() += 1;
        acc
    });
    left.iter()
        .map(|a| a * frequency.get(a).copied().unwrap_or_default())
        .sum()
}

#[cfg(test)]
mod tests {
    use advent::{run_examples, Example};
    use proptest::prelude::*;

    use super::*;

    const EXAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3";

    fn solve_part_1(input: &str) -> anyhow::Result<u64> {
        Ok(total_distance(&parse_input(input)?))
    }

    fn solve_part_2(input: &str) -> anyhow::Result<i64> {
        Ok(similarity_score(&parse_input(input)?))
    }

    #[test]
    fn parses_columns_in_line_order() {
        let lists = parse_input(EXAMPLE).unwrap();
        assert_eq!(lists.left, vec![3, 4, 2, 1, 3, 3]);
        assert_eq!(lists.right, vec![4, 3, 5, 3, 9, 3]);
    }

    #[test]
    fn examples() {
        run_examples(&[Example {
            name: "part_1_example",
            solver: solve_part_1,
            input: EXAMPLE,
            want: 11,
        }]);
        run_examples(&[Example {
            name: "part_2_example",
            solver: solve_part_2,
            input: EXAMPLE,
            want: 31,
        }]);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(solve_part_1("").unwrap(), 0);
        assert_eq!(solve_part_2("\n").unwrap(), 0);
    }

    #[test]
    fn wrong_field_count_names_line() {
        assert_eq!(
            parse_input("1 2\n3 4 5\n6 7"),
            Err(ParseError::FieldCount {
                line: 2,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            parse_input("1 2\n3"),
            Err(ParseError::FieldCount {
                line: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn bad_token_names_line_and_token() {
        assert_eq!(
            parse_input("1 2\n3 4\nfive 6"),
            Err(ParseError::InvalidNumber {
                line: 3,
                token: "five".to_string()
            })
        );
    }

    #[test]
    fn reducers_leave_input_untouched() {
        let lists = parse_input(EXAMPLE).unwrap();
        let before = lists.clone();
        assert_eq!(total_distance(&lists), total_distance(&lists));
        assert_eq!(similarity_score(&lists), similarity_score(&lists));
        assert_eq!(lists, before);
    }

    proptest! {
        #[test]
        fn parser_keeps_one_pair_per_line(pairs in prop::collection::vec((-999i64..999, -999i64..999), 1..50)) {
            let input = pairs
                .iter()
                .map(|(a, b)| format!("{a}   {b}"))
                .collect::<Vec<_>>()
                .join("\n");
            let lists = parse_input(&input).unwrap();
            prop_assert_eq!(lists.left, pairs.iter().map(|(a, _)| *a).collect::<Vec<_>>());
            prop_assert_eq!(lists.right, pairs.iter().map(|(_, b)| *b).collect::<Vec<_>>());
        }

        #[test]
        fn distance_is_symmetric(pairs in prop::collection::vec((0i64..100, 0i64..100), 0..50)) {
            let lists = Lists {
                left: pairs.iter().map(|(a, _)| *a).collect(),
                right: pairs.iter().map(|(_, b)| *b).collect(),
            };
            let swapped = Lists {
                left: lists.right.clone(),
                right: lists.left.clone(),
            };
            prop_assert_eq!(total_distance(&lists), total_distance(&swapped));
        }
    }
}
