use model::entities::career;
use tracing::debug;

/// Ranks careers by skill overlap with the given user skills.
///
/// A career's score is the number of user skills that appear as a
/// case-insensitive substring of any entry in its required-skills list.
/// Careers are sorted descending by score with catalog order preserved on
/// ties, and the top `limit` are returned. An empty skill list falls back to
/// the first `limit` careers in catalog order, so new users still get a
/// deterministic list.
pub fn recommend_careers(
    careers: &[career::Model],
    user_skills: &[String],
    limit: usize,
) -> Vec<career::Model> {
    if user_skills.is_empty() {
        return careers.iter().take(limit).cloned().collect();
    }

    let lowered: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut scored: Vec<(usize, &career::Model)> = careers
        .iter()
        .map(|c| (match_count(c, &lowered), c))
        .collect();
    // `sort_by` is stable, which keeps catalog order on equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    debug!(
        candidates = careers.len(),
        skills = user_skills.len(),
        "scored career recommendations"
    );

    scored
        .into_iter()
        .take(limit)
        .map(|(_, c)| c.clone())
        .collect()
}

fn match_count(career: &career::Model, lowered_skills: &[String]) -> usize {
    let Some(required) = career.required_skills.as_ref() else {
        return 0;
    };
    lowered_skills
        .iter()
        .filter(|skill| {
            required
                .iter()
                .any(|req| req.to_lowercase().contains(skill.as_str()))
        })
        .count()
}
