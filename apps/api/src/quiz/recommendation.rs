use serde::Serialize;

use crate::models::stream::Stream;
use crate::quiz::scoring::Percentages;

/// Static guidance shown for a recommended stream.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Recommendation {
    pub stream: Stream,
    pub primary_label: &'static str,
    pub suggested_subjects: &'static str,
    pub careers: [&'static str; 4],
    pub description: &'static str,
}

static SCIENCE: Recommendation = Recommendation {
    stream: Stream::Science,
    primary_label: "Science Stream",
    suggested_subjects: "Physics, Chemistry, Mathematics/Biology",
    careers: ["Engineering", "Medicine", "Research", "Technology"],
    description: "Your analytical thinking and problem-solving skills align perfectly with science fields.",
};

static COMMERCE: Recommendation = Recommendation {
    stream: Stream::Commerce,
    primary_label: "Commerce Stream",
    suggested_subjects: "Accountancy, Business Studies, Economics",
    careers: [
        "Business Management",
        "Finance",
        "Accounting",
        "Entrepreneurship",
    ],
    description: "Your interest in business and economics makes commerce an ideal choice for you.",
};

static ARTS: Recommendation = Recommendation {
    stream: Stream::Arts,
    primary_label: "Arts/Humanities Stream",
    suggested_subjects: "History, Political Science, Psychology, Literature",
    careers: ["Law", "Psychology", "Journalism", "Civil Services"],
    description: "Your creative thinking and social awareness align with humanities subjects.",
};

pub fn recommendation_for(stream: Stream) -> &'static Recommendation {
    match stream {
        Stream::Science => &SCIENCE,
        Stream::Commerce => &COMMERCE,
        Stream::Arts => &ARTS,
    }
}

/// Picks the stream holding the highest percentage.
/// Ties go to the first stream in science → commerce → arts order.
pub fn resolve(percentages: &Percentages) -> &'static Recommendation {
    let max = percentages.max();
    let winner = Stream::ALL
        .into_iter()
        .find(|s| percentages.get(*s) == max)
        .unwrap_or(Stream::Arts);
    recommendation_for(winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(science: u32, commerce: u32, arts: u32) -> Percentages {
        Percentages {
            science,
            commerce,
            arts,
        }
    }

    #[test]
    fn test_science_wins_tie_with_commerce() {
        assert_eq!(resolve(&pct(50, 50, 0)).stream, Stream::Science);
    }

    #[test]
    fn test_commerce_wins_tie_with_arts() {
        assert_eq!(resolve(&pct(0, 50, 50)).stream, Stream::Commerce);
    }

    #[test]
    fn test_science_wins_three_way_tie() {
        assert_eq!(resolve(&pct(33, 33, 33)).stream, Stream::Science);
    }

    #[test]
    fn test_fallback_split_resolves_to_arts() {
        // 33/33/34: arts holds the strict maximum
        assert_eq!(resolve(&Percentages::FALLBACK).stream, Stream::Arts);
    }

    #[test]
    fn test_strict_maximum_wins() {
        assert_eq!(resolve(&pct(0, 0, 100)).primary_label, "Arts/Humanities Stream");
        assert_eq!(resolve(&pct(20, 70, 10)).primary_label, "Commerce Stream");
        assert_eq!(resolve(&pct(100, 0, 0)).primary_label, "Science Stream");
    }

    #[test]
    fn test_payloads_list_four_careers() {
        for stream in Stream::ALL {
            let rec = recommendation_for(stream);
            assert_eq!(rec.stream, stream);
            assert_eq!(rec.careers.len(), 4);
            assert!(!rec.description.is_empty());
        }
    }
}
