use serde::{Deserialize, Serialize};

/// Human-readable description attached to a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub title: String,
    pub family: String,
    pub tagline: String,
}

struct ProfileLabel {
    code: &'static str,
    title: &'static str,
    family: &'static str,
    tagline: &'static str,
}

const fn label(
    code: &'static str,
    title: &'static str,
    family: &'static str,
    tagline: &'static str,
) -> ProfileLabel {
    ProfileLabel {
        code,
        title,
        family,
        tagline,
    }
}

// Families by the first two letters:
// SI Freezer, OI Écureuil, SE Sniper, OE Kamikaze
static PROFILES: [ProfileLabel; 16] = [
    label("SIRD", "Freezer — Méthodique (SIRD)", "Freezer", "Rigueur froide, exécution posée."),
    label("SIXD", "Freezer — Anxieux (SIXD)", "Freezer", "Vigilance extrême, fébrilité intérieure."),
    label("SIRC", "Freezer — Analyste (SIRC)", "Freezer", "Surintellectualisation, hésitation chronique."),
    label("SIXC", "Freezer — Chaotique (SIXC)", "Freezer", "Agitation sans direction, confusion glacée."),
    label("OIRD", "Écureuil — Discipliné (OIRD)", "Écureuil", "Routine forte, prudence élevée."),
    label("OIXD", "Écureuil — Paniqué (OIXD)", "Écureuil", "Urgence permanente, sur-réactions."),
    label("OIRC", "Écureuil — Prudent (OIRC)", "Écureuil", "Sélectif, souvent spectateur."),
    label("OIXC", "Écureuil — Sauvage (OIXC)", "Écureuil", "Action impulsive, besoin d’intensité."),
    label("SERD", "Sniper — Strict (SERD)", "Sniper", "Zéro improvisation, métronome intérieur."),
    label("SEXD", "Sniper — Crispé (SEXD)", "Sniper", "Hyper-tension, précision anxieuse."),
    label("SERC", "Sniper — Rêveur (SERC)", "Sniper", "Vision large, scénarios imaginés."),
    label("SEXC", "Sniper — Nerveux (SEXC)", "Sniper", "Réactivité extrême, agitation continue."),
    label("OERD", "Kamikaze — Structuré (OERD)", "Kamikaze", "Assauts planifiés, énergie canalisée."),
    label("OEXD", "Kamikaze — Nerveux (OEXD)", "Kamikaze", "Explosif, précipitation chronique."),
    label("OERC", "Kamikaze — Euphorique (OERC)", "Kamikaze", "Ivresse des gains, cycles extrêmes."),
    label("OEXC", "Kamikaze — Vengeur (OEXC)", "Kamikaze", "Revanche, escalades risquées."),
];

/// All known codes in table order.
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|p| p.code)
}

/// Look up the profile for `code`. Never fails: an unknown code yields an
/// entry titled with the raw code and empty family and tagline.
pub fn resolve_profile(code: &str) -> ProfileEntry {
    match PROFILES.iter().find(|p| p.code == code) {
        Some(p) => ProfileEntry {
            title: p.title.to_string(),
            family: p.family.to_string(),
            tagline: p.tagline.to_string(),
        },
        None => {
            tracing::warn!("No profile for code {:?}, using fallback", code);
            ProfileEntry {
                title: code.to_string(),
                family: String::new(),
                tagline: String::new(),
            }
        }
    }
}
