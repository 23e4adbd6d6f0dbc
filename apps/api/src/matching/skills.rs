//! Skill dictionary: the fixed vocabulary the profile extractor scans for,
//! plus the per-skill learning-time table used by the suggestion generator.

use once_cell::sync::Lazy;
use regex::Regex;

/// A canonical skill token and the alternative spellings that map onto it.
#[derive(Debug, Clone, Copy)]
pub struct SkillEntry {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

const fn skill(canonical: &'static str, aliases: &'static [&'static str]) -> SkillEntry {
    SkillEntry { canonical, aliases }
}

/// Scan order of the extractor. Canonical tokens are lowercase and never a
/// single letter or common word; those forms are aliases only, since the
/// scorer matches skills by substring.
pub const SKILL_DICTIONARY: &[SkillEntry] = &[
    // Languages
    skill("python", &[]),
    skill("java", &[]),
    skill("javascript", &["js", "ecmascript"]),
    skill("typescript", &["ts"]),
    skill("c++", &["cpp"]),
    skill("c language", &["c"]),
    skill("c#", &["csharp"]),
    skill("golang", &["go"]),
    skill("rust", &[]),
    skill("kotlin", &[]),
    skill("swift", &[]),
    skill("php", &[]),
    skill("ruby", &[]),
    skill("r language", &["r"]),
    skill("sql", &[]),
    skill("html", &["html5"]),
    skill("css", &["css3"]),
    // Frameworks and libraries
    skill("react", &["reactjs", "react.js"]),
    skill("angular", &["angularjs"]),
    skill("vue", &["vuejs", "vue.js"]),
    skill("node.js", &["nodejs", "node"]),
    skill("express", &["expressjs", "express.js"]),
    skill("django", &[]),
    skill("flask", &[]),
    skill("spring boot", &["springboot"]),
    skill("flutter", &[]),
    skill("tensorflow", &[]),
    skill("pytorch", &[]),
    skill("pandas", &[]),
    skill("numpy", &[]),
    // Data stores
    skill("mongodb", &["mongo"]),
    skill("mysql", &[]),
    skill("postgresql", &["postgres"]),
    skill("redis", &[]),
    // Tooling and platforms
    skill("git", &["github"]),
    skill("docker", &[]),
    skill("kubernetes", &["k8s"]),
    skill("aws", &["amazon web services"]),
    skill("azure", &[]),
    skill("gcp", &["google cloud"]),
    skill("linux", &[]),
    skill("rest api", &["restful", "rest apis"]),
    skill("graphql", &[]),
    // Domains
    skill("machine learning", &["ml"]),
    skill("deep learning", &[]),
    skill("data science", &[]),
    skill("data structures", &["dsa"]),
    skill("algorithms", &[]),
    skill("distributed systems", &[]),
    skill("system design", &[]),
    skill("cloud computing", &[]),
    skill("cybersecurity", &["cyber security"]),
    skill("blockchain", &[]),
    skill("devops", &[]),
    skill("ui/ux", &["ux", "figma"]),
];

/// Estimated time to pick up a skill from scratch.
const LEARNING_TIMES: &[(&str, &str)] = &[
    ("python", "4-6 weeks"),
    ("java", "6-8 weeks"),
    ("javascript", "4-6 weeks"),
    ("typescript", "2-3 weeks"),
    ("c++", "8-10 weeks"),
    ("golang", "4-6 weeks"),
    ("rust", "8-12 weeks"),
    ("sql", "2-3 weeks"),
    ("react", "4-6 weeks"),
    ("angular", "6-8 weeks"),
    ("node.js", "4-6 weeks"),
    ("django", "4-6 weeks"),
    ("spring boot", "6-8 weeks"),
    ("mongodb", "2-3 weeks"),
    ("git", "1-2 weeks"),
    ("docker", "2-3 weeks"),
    ("kubernetes", "4-6 weeks"),
    ("aws", "6-8 weeks"),
    ("machine learning", "12-16 weeks"),
    ("deep learning", "12-16 weeks"),
    ("data structures", "8-12 weeks"),
    ("algorithms", "8-12 weeks"),
    ("distributed systems", "10-12 weeks"),
    ("system design", "6-8 weeks"),
];

pub const DEFAULT_LEARNING_TIME: &str = "3-4 weeks";

/// Maps a canonical token or alias to its canonical token.
pub fn canonical_skill(skill: &str) -> Option<&'static str> {
    SKILL_DICTIONARY
        .iter()
        .find(|e| e.canonical == skill || e.aliases.iter().any(|alias| *alias == skill))
        .map(|e| e.canonical)
}

/// Looks up the learning-time estimate for a skill (case-insensitive).
/// Aliases resolve to their canonical entry ("go" reads as "golang").
pub fn learning_time(skill: &str) -> &'static str {
    let skill = skill.trim().to_lowercase();
    let name = canonical_skill(&skill).unwrap_or(skill.as_str());
    LEARNING_TIMES
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, time)| *time)
        .unwrap_or(DEFAULT_LEARNING_TIME)
}

/// One compiled matcher per dictionary entry, in dictionary order.
/// Each matcher covers the canonical token and all of its aliases.
pub(crate) static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SKILL_DICTIONARY
        .iter()
        .filter_map(|entry| {
            let alternation = std::iter::once(entry.canonical)
                .chain(entry.aliases.iter().copied())
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join("|");
            // `\b` cannot anchor tokens that end in punctuation ("c++", "c#"),
            // so boundaries are expressed as "non-word char or text edge".
            let pattern = format!(r"(?i)(?:^|\W)(?:{alternation})(?:\W|$)");
            Regex::new(&pattern)
                .map_err(|e| tracing::error!("Invalid skill pattern for {}: {e}", entry.canonical))
                .ok()
                .map(|re| (entry.canonical, re))
        })
        .collect()
});
