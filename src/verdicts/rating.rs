use termcolor::Color;

pub const NEWBIE: Color = Color::Rgb(204, 204, 204);
pub const PUPIL: Color = Color::Rgb(119, 255, 119);
pub const SPECIALIST: Color = Color::Rgb(119, 221, 187);
pub const EXPERT: Color = Color::Rgb(170, 170, 255);
pub const CANDIDATE_MASTER: Color = Color::Rgb(255, 136, 255);
pub const MASTER: Color = Color::Rgb(255, 204, 136);
pub const INTERNATIONAL_MASTER: Color = Color::Rgb(255, 187, 85);
pub const GRANDMASTER: Color = Color::Rgb(255, 119, 119);
pub const INTERNATIONAL_GRANDMASTER: Color = Color::Rgb(255, 51, 51);
pub const LEGENDARY_GRANDMASTER: Color = Color::Rgb(170, 0, 0);

/// Background color of a rating band. Unrated problems take the lowest band.
pub fn band_color(rating: Option<u32>) -> Color {
    match rating {
        Some(r) if r >= 3000 => LEGENDARY_GRANDMASTER,
        Some(r) if r >= 2600 => INTERNATIONAL_GRANDMASTER,
        Some(r) if r >= 2400 => GRANDMASTER,
        Some(r) if r >= 2300 => INTERNATIONAL_MASTER,
        Some(r) if r >= 2100 => MASTER,
        Some(r) if r >= 1900 => CANDIDATE_MASTER,
        Some(r) if r >= 1600 => EXPERT,
        Some(r) if r >= 1400 => SPECIALIST,
        Some(r) if r >= 1200 => PUPIL,
        _ => NEWBIE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        let expect = [
            (0, NEWBIE),
            (1199, NEWBIE),
            (1200, PUPIL),
            (1399, PUPIL),
            (1400, SPECIALIST),
            (1599, SPECIALIST),
            (1600, EXPERT),
            (1899, EXPERT),
            (1900, CANDIDATE_MASTER),
            (2099, CANDIDATE_MASTER),
            (2100, MASTER),
            (2299, MASTER),
            (2300, INTERNATIONAL_MASTER),
            (2399, INTERNATIONAL_MASTER),
            (2400, GRANDMASTER),
            (2599, GRANDMASTER),
            (2600, INTERNATIONAL_GRANDMASTER),
            (2999, INTERNATIONAL_GRANDMASTER),
            (3000, LEGENDARY_GRANDMASTER),
            (5000, LEGENDARY_GRANDMASTER),
        ];
        for (rating, color) in expect {
            assert_eq!(band_color(Some(rating)), color, "rating {}", rating);
        }
    }

    #[test]
    fn total_over_all_ratings() {
        let bands = [
            NEWBIE,
            PUPIL,
            SPECIALIST,
            EXPERT,
            CANDIDATE_MASTER,
            MASTER,
            INTERNATIONAL_MASTER,
            GRANDMASTER,
            INTERNATIONAL_GRANDMASTER,
            LEGENDARY_GRANDMASTER,
        ];
        for rating in 0..=5000 {
            let color = band_color(Some(rating));
            assert_eq!(bands.iter().filter(|b| **b == color).count(), 1);
        }
    }

    #[test]
    fn unrated_is_lowest_band() {
        assert_eq!(band_color(None), NEWBIE);
    }
}
