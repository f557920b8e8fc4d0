use crate::r#match::result::MatchResult;
use crate::team::Team;

/// Plain-text goal-by-goal lines for a finished match. Rendering and
/// narration of these lines belong to the presentation layer.
pub(crate) fn narrate(result: &MatchResult, home: &Team, away: &Team) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.goals.len() + 2);
    lines.push(format!("{} vs {}", home.name, away.name));

    let mut home_goals = 0u8;
    let mut away_goals = 0u8;

    for goal in &result.goals {
        let team = if goal.team == result.home {
            home_goals += 1;
            &home.name
        } else {
            away_goals += 1;
            &away.name
        };

        let minute = if goal.minute > 90 {
            format!("{}' (ET)", goal.minute)
        } else {
            format!("{}'", goal.minute)
        };
        let assist = match &goal.assist {
            Some(provider) => format!(" (assist: {provider})"),
            None => String::new(),
        };

        lines.push(format!(
            "{minute} {scorer} scores for {team}{assist} [{home_goals}-{away_goals}]",
            scorer = goal.scorer,
        ));
    }

    if result.goals.is_empty() {
        lines.push("A tightly contested match with no goals.".to_string());
    }

    let full_time = result.full_time_score();
    let mut closing = format!(
        "Full time: {} {} - {} {}",
        home.name, full_time.home, full_time.away, away.name
    );
    if result.went_to_extra_time() {
        closing.push_str(&format!(" (after extra time, {} at 90')", result.score));
    }
    if let Some(shootout) = result.penalties {
        closing.push_str(&format!(", penalties {shootout}"));
    }
    lines.push(closing);

    lines
}
