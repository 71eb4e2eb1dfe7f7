//! Cheat-group labeler.
//!
//! Labeling happens in two phases. [`collect_groups`] walks a record's
//! interleaved layout and splits its patch pairs into [`GroupCandidate`]s at
//! blank lines and header lines. A [`Labeler`] then names each candidate,
//! keeping every label it hands out unique for the lifetime of the labeler.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use pnach_forge_core::PatchPair;

use crate::record::{LineItem, PatchRecord};

/// Labels made only of these words and digits carry no information.
static NOISE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(patch|cheat|code|modifier|fix|enable|disable|on|off|[0-9]|\s)+$")
        .expect("noise pattern is valid")
});

static MARKER_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?://|#|;)\s*([^:]*):?").expect("marker header pattern is valid")
});

static BRACKET_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\[(?:cheats/)?([^\]]*)\]").expect("bracket header pattern is valid")
});

static METADATA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*//\s*(?:serials?\s*:|crc\s*[:=]|generated by\b)")
        .expect("metadata pattern is valid")
});

/// Keyword and address rules, tried in order. The first matching rule whose
/// label is still free wins.
const LABEL_RULES: &[(&str, &str)] = &[
    (
        r"infinite.?ammo|unlimited.?ammo|max.?ammo|all.?ammo|endless.?ammo|never.?reload|no.?reload",
        "Infinite Ammo",
    ),
    (
        r"one.?hit.?kill|1.?hit.?kill|kill.?in.?1|insta.?kill|instant.?kill|kill.?with.?one",
        "One-Hit Kill",
    ),
    (
        r"invincib|invulnerab|god.?mode|no.?damage|no.?hit|no.?death|immortal|never.?die|undying|unharmed",
        "Invincibility",
    ),
    (
        r"unlock.?char|all.?char|all.?fighters|all.?heroes|all.?players|every.?character|character.?select",
        "Unlock Characters",
    ),
    (
        r"unlock.?level|all.?level|all.?stages|all.?maps|every.?level|stage.?select|open.?all.?levels",
        "Unlock Levels/Stages",
    ),
    (
        r"unlock.?weapon|all.?weapon|all.?guns|all.?arms|every.?weapon|weapon.?select|all.?swords|all.?items.?unlocked",
        "Unlock All Weapons",
    ),
    (
        r"unlock.?item|all.?item|all.?cards|all.?gear|all.?equipment|every.?item|item.?select|all.?collectibles|all.?costumes|all.?outfits",
        "Unlock All Items",
    ),
    (
        r"exp|experience|level.?up|max.?level|lvl.?up|gain.?level|level.?999|level.?max",
        "EXP/Level Modifier",
    ),
    (
        r"stat.?max|max.?stat|all.?stat|full.?stat|999.?stat|255.?stat|max.?strength|max.?defense|max.?attack|max.?magic|max.?skill|max.?ability|all.?abilities|all.?skills",
        "Max Stats",
    ),
    (
        r"money|gil|zenny|cash|gold|coins|credits|points|score",
        "Money/Score Modifier",
    ),
    (
        r"health|hp|life|heal|never.?hurt|auto.?recovery",
        "Health Modifier",
    ),
    (
        r"mp|sp|ap|ep|energy|mana|magic.?points",
        "MP/Energy Modifier",
    ),
    (
        r"timer|time.?stop|freeze.?time|infinite.?time|time.?modifier|slow.?time|fast.?time|no.?countdown",
        "Timer Modifier",
    ),
    (
        r"speed.?up|fast.?move|run.?fast|move.?speed|walk.?speed|move.?faster|faster.?movement|quick.?move|speed.?modifier|slow.?motion|slowmo|slow.?move",
        "Speed Modifier",
    ),
    (
        r"gravity|float|fly|moon.?jump|super.?jump|high.?jump",
        "Gravity Modifier",
    ),
    (
        r"npc|enemy|ai|boss|monster|foe|all.?enemies",
        "NPC/Enemy Modifier",
    ),
    (
        r"distance|range|reach",
        "Distance/Range Modifier",
    ),
    (
        r"menu|pause",
        "Menu/Debug Modifier",
    ),
    (
        r"latency|input.?lag|controller.?lag|controller.?delay|input.?delay",
        "Input Latency Modifier",
    ),
    (
        r"camera|fov|field.?of.?view|zoom|angle|perspective",
        "Camera Modifier",
    ),
    (
        r"music|sound|audio|bgm|sfx|mute|volume|soundtrack",
        "Music/Sound Modifier",
    ),
    (
        r"language|region|pal|ntsc|japan|usa|europe|eng|fre|ger|ita|spa|por|rus|chi|kor",
        "Language/Region Patch",
    ),
    (
        r"save.?anywhere|save.?menu|quick.?save|auto.?save|save.?state|save.?anytime|save.?hack|save.?modifier|save.?location",
        "Save Anywhere/Save Modifier",
    ),
    (
        r"walk.?through.?walls|no.?clip|noclip|clip.?off|ghost.?mode|walk.?anywhere|pass.?through.?walls|phase.?through.?walls|wall.?hack|collision.?off|collision.?hack",
        "No Clip/Walk Through Walls",
    ),
    (
        r"debug|test|dev.?mode|developer|beta.?mode|prototype.?mode|dev.?tools",
        "Debug/Test Mode",
    ),
    (
        r"framerate|60.?fps|30.?fps|120.?fps|fps.?unlock|frame.?rate|unlocked.?fps|frame.?skip",
        "Framerate Modifier",
    ),
    (
        r"fix|patch|workaround|bypass|skip|crash|freeze|hang|softlock|hardlock",
        "Fix/Bypass Patch",
    ),
    (
        r"cheat|enable|disable|toggle|on.?off|activate|deactivate|switch|turn.?on|turn.?off",
        "Cheat Toggle",
    ),
    // Address heuristics, anchored on the first pair's address.
    (r"^20[0-9A-F]{6}", "Simple 8-bit Patch"),
    (r"^10[0-9A-F]{6}", "16-bit Patch"),
    (r"^00[0-9A-F]{6}", "8-bit Patch"),
    (r"^E0[0-9A-F]{6}", "Conditional Patch"),
    (r"^D0[0-9A-F]{6}", "Conditional Patch"),
    (r"^2[0-9A-F]{7}", "Write Patch"),
    (r"^1[0-9A-F]{7}", "Write Patch"),
    (r"^0[0-9A-F]{7}", "Write Patch"),
];

static LABEL_RULE_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(LABEL_RULES.iter().map(|(pattern, _)| format!("(?i){pattern}")))
        .expect("label rule patterns are valid")
});

/// True if the text says nothing beyond "patch", "cheat", "on" and digits.
pub fn is_noise_label(text: &str) -> bool {
    NOISE_RE.is_match(text)
}

/// Make a label safe inside `[Cheats/...]`.
///
/// Square brackets become parentheses, since a `]` would end the section
/// header early when the file is read back.
pub(crate) fn sanitize_label(label: &str) -> String {
    label.trim().replace('[', "(").replace(']', ")")
}

/// Lines the generator writes itself (`// serials:`, `// CRC:`, signature).
pub(crate) fn is_metadata_comment(line: &str) -> bool {
    METADATA_RE.is_match(line)
}

/// Label of a `[Cheats/Label]` or `[Label]` line.
pub(crate) fn bracket_header(line: &str) -> Option<String> {
    BRACKET_HEADER_RE
        .captures(line)
        .map(|caps| caps[1].trim().to_string())
}

/// An unlabeled run of patch pairs and the text found around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCandidate {
    /// Label from the header line that opened the group.
    pub header: Option<String>,
    pub pairs: Vec<PatchPair>,
    /// Inline `//` hints from the group's patch lines, in order.
    pub hints: Vec<String>,
    /// Plain text lines inside the group, e.g. a description.
    pub context: Vec<String>,
}

impl GroupCandidate {
    /// Text the keyword rules run against. Hex pairs come first so the
    /// address rules see the first address at the very start. The header
    /// and noise hints are left out.
    fn search_text(&self) -> String {
        let mut parts: Vec<String> = self.pairs.iter().map(PatchPair::to_raw_line).collect();
        parts.extend(
            self.hints
                .iter()
                .filter(|hint| !is_noise_label(hint.trim()))
                .cloned(),
        );
        parts.extend(self.context.iter().cloned());
        parts.join(" ")
    }
}

/// A named group of patch pairs, ready for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatGroup {
    pub label: String,
    pub pairs: Vec<PatchPair>,
}

enum Classified {
    Metadata,
    MarkerHeader(Option<String>),
    BracketHeader(Option<String>),
    Text(String),
}

fn classify(line: &str) -> Classified {
    if is_metadata_comment(line) {
        return Classified::Metadata;
    }
    if let Some(label) = bracket_header(line) {
        return Classified::BracketHeader(Some(label).filter(|l| !l.is_empty()));
    }
    if let Some(caps) = MARKER_HEADER_RE.captures(line) {
        let label = caps[1].trim().to_string();
        return Classified::MarkerHeader(Some(label).filter(|l| !l.is_empty()));
    }
    Classified::Text(line.trim().to_string())
}

/// Split a record's pairs into candidate groups.
///
/// A blank line flushes the open group and forgets its header. A header
/// line (`// Label`, `# Label`, `; Label` or `[Cheats/Label]`) flushes and
/// opens a new group. Groups without pairs are dropped. A comment header
/// that directly follows a bracket header, before any pair, is treated as
/// description text rather than a new header. Commented-out patch lines
/// still belong to their group.
///
/// When no candidate carries a header, inline hint or text, all pairs are
/// merged into one implicit group headed by the record's title.
pub fn collect_groups(record: &PatchRecord) -> Vec<GroupCandidate> {
    let mut groups = Vec::new();
    let mut current = GroupCandidate::default();
    let mut bracket_open = false;

    let flush = |current: &mut GroupCandidate, groups: &mut Vec<GroupCandidate>| {
        let group = std::mem::take(current);
        if !group.pairs.is_empty() {
            groups.push(group);
        }
    };

    for item in record.layout().iter() {
        match item {
            LineItem::Blank => {
                flush(&mut current, &mut groups);
                bracket_open = false;
            }
            LineItem::Comment(i) => {
                let Some(line) = record.comment_lines.get(*i) else {
                    continue;
                };
                match classify(line) {
                    Classified::Metadata => {}
                    Classified::BracketHeader(label) => {
                        flush(&mut current, &mut groups);
                        current.header = label;
                        bracket_open = true;
                    }
                    Classified::MarkerHeader(label) => {
                        if bracket_open && current.pairs.is_empty() {
                            if let Some(text) = label {
                                current.context.push(text);
                            }
                        } else {
                            flush(&mut current, &mut groups);
                            current.header = label;
                            bracket_open = false;
                        }
                    }
                    Classified::Text(text) => {
                        if !text.is_empty() {
                            current.context.push(text);
                        }
                    }
                }
            }
            LineItem::Patch { pair, hint, .. } => {
                let Some(pair) = record.pairs.get(*pair) else {
                    continue;
                };
                current.pairs.push(pair.clone());
                if let Some(hint) = hint {
                    current.hints.push(hint.clone());
                }
            }
        }
    }
    flush(&mut current, &mut groups);

    let ungrouped = groups
        .iter()
        .all(|g| g.header.is_none() && g.hints.is_empty() && g.context.is_empty());
    if ungrouped && !groups.is_empty() {
        let mut implicit = GroupCandidate {
            header: record.title.clone(),
            ..GroupCandidate::default()
        };
        for group in groups {
            implicit.pairs.extend(group.pairs);
        }
        return vec![implicit];
    }

    groups
}

/// Assigns unique labels to candidate groups.
///
/// One labeler corresponds to one generation pass; reuse it across calls to
/// keep labels unique across all of them.
#[derive(Debug, Default)]
pub struct Labeler {
    used: HashSet<String>,
    fallbacks: usize,
}

impl Labeler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels handed out so far.
    pub fn used_labels(&self) -> &HashSet<String> {
        &self.used
    }

    /// Pick a label for `candidate`.
    ///
    /// Rules, first hit wins, skipping any label already used:
    /// 1. the header, unless it is noise;
    /// 2. the first inline hint that is not noise;
    /// 3. the first keyword or address rule matching the group's text;
    /// 4. `Patch <addr6>=<val6>` for a single pair;
    /// 5. `Cheat Group <n> (<count> codes)`.
    pub fn label(&mut self, candidate: &GroupCandidate) -> String {
        let explicit = candidate
            .header
            .iter()
            .chain(candidate.hints.iter())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && !is_noise_label(s))
            .map(sanitize_label);
        for label in explicit {
            if self.claim(&label) {
                return label;
            }
        }

        let text = candidate.search_text();
        for index in LABEL_RULE_SET.matches(&text).iter() {
            let label = LABEL_RULES[index].1;
            if self.claim(label) {
                return label.to_string();
            }
        }

        if let [pair] = candidate.pairs.as_slice() {
            let (addr, value) = pair.short_form();
            let label = format!("Patch {addr}={value}");
            if self.claim(&label) {
                return label;
            }
        }

        loop {
            self.fallbacks += 1;
            let label = format!(
                "Cheat Group {} ({} codes)",
                self.fallbacks,
                candidate.pairs.len()
            );
            if self.claim(&label) {
                log::debug!("No rule matched, falling back to '{label}'");
                return label;
            }
        }
    }

    fn claim(&mut self, label: &str) -> bool {
        if self.used.contains(label) {
            false
        } else {
            self.used.insert(label.to_string());
            true
        }
    }
}

/// Group and label a record's pairs in one pass.
pub fn label_groups(record: &PatchRecord) -> Vec<CheatGroup> {
    let mut labeler = Labeler::new();
    collect_groups(record)
        .into_iter()
        .map(|candidate| CheatGroup {
            label: labeler.label(&candidate),
            pairs: candidate.pairs,
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/labeler_tests.rs"]
mod tests;
