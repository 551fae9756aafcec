use strsieve::{FilterResultVerbose, PatternTraits};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        /// Quoted entry, or a dimmed marker for the absent sentinel.
        pub fn entry(&self, entry: Option<&str>) -> String {
            match entry {
                Some(s) => self.bold(self.paint(format!("{:?}", s), GREEN)),
                None => self.dim("<absent>"),
            }
        }
    }
}

pub fn print_run(res: &FilterResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "\n{} {}",
        palette.bold(palette.paint(format!("⚙  Filtering: {}", res.kind), ansi::CYAN)),
        palette.entry(res.pattern.as_deref())
    );

    println!("\n{}", palette.paint("━━━ Pattern ━━━", ansi::GRAY));
    print_traits(res.details.traits, &palette);

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    if res.results.is_empty() {
        println!("{}", palette.dim("  No entries matched"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • number-format needs the exact same length as the format");
        println!("  • wildcard patterns are compared as given (entries are lower-case)");
        println!("\n{}", palette.dim("  Tip: Set STRSIEVE_LOG=strsieve::engine=debug to see the pattern scan"));
    } else {
        print_results(res, &palette);
    }

    println!("\n{}", palette.paint("━━━ Scan ━━━", ansi::GRAY));
    println!(
        "  Store: {}  │  Scanned: {}  │  Matched: {}  │  Elapsed: {}",
        palette.paint(res.details.store_len.to_string(), ansi::BLUE),
        palette.paint(res.details.scanned.to_string(), ansi::CYAN),
        palette.paint(res.results.len().to_string(), ansi::GREEN),
        palette.dim(format!("{:?}", res.details.elapsed)),
    );
    println!();
}

fn print_traits(traits: PatternTraits, palette: &ansi::Palette) {
    if traits.is_empty() {
        println!("  {}", palette.dim("plain literal"));
        return;
    }
    let names: Vec<&str> = traits.iter_names().map(|(name, _)| name).collect();
    println!("  {}", palette.paint(names.join(" | "), ansi::BLUE));
    if traits.contains(PatternTraits::EMPTY) {
        println!("  {}", palette.dim("empty pattern: every entry matches"));
    }
}

fn print_results(res: &FilterResultVerbose, palette: &ansi::Palette) {
    for (idx, entry) in res.results.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), palette.entry(entry.as_deref()));
    }
}
