use super::*;

#[test]
fn skill_levels_are_valid_percentages() {
    assert_eq!(SKILL_BARS.len(), 9);
    for skill in SKILL_BARS {
        assert!(skill.level <= 100, "{} exceeds 100%", skill.name);
        assert!(skill.color.starts_with('#'), "{} has no hex color", skill.name);
    }
}

#[test]
fn strongest_skill_leads_the_table() {
    let max = SKILL_BARS.iter().map(|skill| skill.level).max().unwrap();
    assert_eq!(SKILL_BARS[0].name, "Flutter");
    assert_eq!(SKILL_BARS[0].level, max);
}

#[test]
fn each_experience_names_three_highlights() {
    assert_eq!(EXPERIENCES.len(), 4);
    let titles: Vec<&str> = EXPERIENCES.iter().map(|experience| experience.title).collect();
    assert_eq!(
        titles,
        [
            "Mobile Development",
            "Web Development",
            "Database Design",
            "Backend Systems",
        ]
    );
}
