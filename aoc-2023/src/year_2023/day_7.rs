use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::line_error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["2023", "sorting"])]
pub struct Solver;

const JACK: u8 = 11;
const JOKER: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Card values 2..=14, with jacks as 11
    cards: [u8; 5],
    bid: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    fn classify(cards: &[u8; 5]) -> Self {
        let jokers = cards.iter().filter(|&&c| c == JOKER).count();
        let mut counts: Vec<usize> = cards
            .iter()
            .filter(|&&c| c != JOKER)
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();

        match counts.first_mut() {
            Some(largest) => *largest += jokers,
            None => counts.push(jokers),
        }

        match counts[..] {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

fn card_value(c: char) -> anyhow::Result<u8> {
    Ok(match c {
        '2'..='9' => c as u8 - b'0',
        'T' => 10,
        'J' => JACK,
        'Q' => 12,
        'K' => 13,
        'A' => 14,
        other => bail!("unknown card {other:?}"),
    })
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected '<cards> <bid>'"))?;
    let cards = cards.chars().map(card_value).collect::<anyhow::Result<Vec<u8>>>()?;
    let cards: [u8; 5] = cards
        .try_into()
        .map_err(|v: Vec<u8>| anyhow!("a hand has 5 cards, got {}", v.len()))?;
    Ok(Hand {
        cards,
        bid: bid.parse()?,
    })
}

fn total_winnings(hands: &[Hand], jokers: bool) -> u64 {
    hands
        .iter()
        .map(|hand| {
            let mut cards = hand.cards;
            if jokers {
                cards.iter_mut().filter(|c| **c == JACK).for_each(|c| *c = JOKER);
            }
            ((HandType::classify(&cards), cards), hand.bid)
        })
        .sorted_unstable()
        .zip(1u64..)
        .map(|((_, bid), rank)| bid * rank)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_hand(line).map_err(|e| line_error(idx, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, true).to_string())
    }
}
