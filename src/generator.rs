//! Synthetic feed generator.
//!
//! Produces pseudo-random but well-formed posts in the spirit of hacker
//! ipsum: titles are an adjective plus a noun, bodies are one techno-babble
//! sentence. Used to seed the live feed at startup and to fill the archive
//! batch.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Post;

const ADJECTIVES: &[&str] = &[
    "auxiliary",
    "primary",
    "back-end",
    "digital",
    "open-source",
    "virtual",
    "cross-platform",
    "redundant",
    "online",
    "haptic",
    "multi-byte",
    "wireless",
    "neural",
    "optical",
    "solid state",
    "mobile",
];

const NOUNS: &[&str] = &[
    "driver",
    "protocol",
    "bandwidth",
    "panel",
    "microchip",
    "program",
    "port",
    "card",
    "array",
    "interface",
    "system",
    "sensor",
    "firewall",
    "hard drive",
    "pixel",
    "alarm",
    "feed",
    "monitor",
    "application",
    "transmitter",
    "bus",
    "circuit",
    "capacitor",
    "matrix",
];

const VERBS: &[&str] = &[
    "back up",
    "bypass",
    "hack",
    "override",
    "compress",
    "copy",
    "navigate",
    "index",
    "connect",
    "generate",
    "quantify",
    "calculate",
    "synthesize",
    "input",
    "transmit",
    "reboot",
    "parse",
];

const ABBREVIATIONS: &[&str] = &[
    "TCP", "HTTP", "SSD", "RAM", "GB", "CSS", "SSL", "AGP", "SQL", "FTP", "PCI", "AI", "ADP",
    "RSS", "XML", "EXE", "COM", "HDD", "SMTP", "SMS", "USB", "PNG", "SCSI", "JSON", "XSS",
];

fn pick<'a, R: Rng>(rng: &mut R, words: &'a [&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or("")
}

fn random_phrase<R: Rng>(rng: &mut R) -> String {
    let adj = pick(rng, ADJECTIVES);
    let verb = pick(rng, VERBS);
    let verb2 = pick(rng, VERBS);
    let noun = pick(rng, NOUNS);
    let noun2 = pick(rng, NOUNS);
    let abbr = pick(rng, ABBREVIATIONS);
    match rng.gen_range(0..6) {
        0 => format!(
            "If we {} the {}, we can get to the {} {} through the {} {}!",
            verb, noun, abbr, noun2, adj, noun
        ),
        1 => format!("We need to {} the {} {} {}!", verb, adj, abbr, noun),
        2 => format!(
            "Try to {} the {} {}, maybe it will {} the {} {}!",
            verb, abbr, noun, verb2, adj, noun2
        ),
        3 => format!(
            "Use the {} {} {}, then you can {} the {} {}!",
            adj, abbr, noun, verb, adj, noun2
        ),
        4 => format!(
            "The {} {} is down, {} the {} {} so we can {} the {} {}!",
            abbr, noun, verb, adj, noun2, verb2, abbr, noun
        ),
        _ => format!(
            "I'll {} the {} {} {}, that should {} the {} {}!",
            verb, adj, abbr, noun, verb2, abbr, noun2
        ),
    }
}

/// One random, well-formed post.
pub fn random_post<R: Rng>(rng: &mut R) -> Post {
    let title = format!("{} {}", pick(rng, ADJECTIVES), pick(rng, NOUNS));
    Post::new(title, random_phrase(rng))
}

/// A batch of `count` random posts, using the thread-local RNG.
pub fn sample_posts(count: usize) -> Vec<Post> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_post(&mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_post_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let post = random_post(&mut rng);
            assert!(!post.title.is_empty());
            assert!(!post.body.is_empty());
            // Title is "adjective noun": at least two words.
            assert!(post.title.split_whitespace().count() >= 2);
        }
    }

    #[test]
    fn sample_posts_yields_requested_count() {
        assert_eq!(sample_posts(0).len(), 0);
        assert_eq!(sample_posts(30).len(), 30);
    }
}
