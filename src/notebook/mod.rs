//! Case notebook
//!
//! Clues start locked and are revealed by scene interactions. The book
//! lists unlocked clues ten per page, numbered in the order they appear
//! in the catalog; selecting one shows its description on the right page.

mod view;

pub use view::*;

use macroquad::prelude::Color;

pub const CLUES_PER_PAGE: usize = 10;
/// Full bright -> dim -> bright cycle of the selected entry
pub const PULSE_CYCLE_MS: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Clue {
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

const fn clue(name: &'static str, description: &'static str, unlocked: bool) -> Clue {
    Clue { name, description, unlocked }
}

pub const CLUES: [Clue; 15] = [
    clue("Victim", "Real estate mogul John Smith, 54. Found in his office. Appears to be an assassination. There are signs of a struggle. Forensic team is investigating.", true),
    clue("Murder Weapon", "A fruit knife, found 20m from the scene, with partial fingerprints. The knife is old and rusty. It does not belong to the victim.", true),
    clue("Suspect #1: The Secretary", "The secretary mysteriously disappeared right after the incident. She seemed afraid of something and recently inherited a large sum from an unknown source. Still missing.", false),
    clue("Maid's Testimony", "She claims to have heard a loud noise around 10 PM and a car speeding away. She was very panicked and saw a tall figure near the main gate.", false),
    clue("Strange Fingerprint", "The fingerprint on the window does not belong to the victim or any household members. Appears to be male and matches a known criminal with a history of burglary.", false),
    clue("Anonymous Note", "A small note was found under the desk with threatening content. Handwritten in pencil. It mentions a past dealing that went sour, indicating a revenge motive.", false),
    clue("Motive", "The victim had many disputes with business rivals, and also had several large debts. There are also rumors of a secret affair.", false),
    clue("Hidden Camera Footage", "Security footage from a nearby building shows a person entering the victim's house around the time of death. The quality is poor.", false),
    clue("Old Diary Entry", "An old diary belonging to the victim mentions a deep secret involving a former business partner who had threatened him recently.", false),
    clue("Witness Sighting", "A neighbor reported seeing a suspicious vehicle parked nearby for several hours before the murder.", false),
    clue("Phone Records", "The victim's phone records show a series of calls to an unknown number shortly before his death. The last call was very brief.", false),
    clue("Financial Transactions", "Recent large and suspicious financial transactions were found in the victim's bank account, totaling over a million dollars, with transfers to offshore accounts.", false),
    clue("Envy Mask", "A cracked green mask found beside the envy victim. The same make was sold at a costume shop near the victim's office.", false),
    clue("Time of Death", "The pocket watch stopped at 11:47 PM. If it broke in the struggle, that is when it happened.", false),
    clue("Secret Ledger", "Pages torn from a ledger, listing payments to initials that match one of the suspects.", false),
];

/// Triangle wave between `bright` (t = 0) and `dim` (half cycle)
pub fn pulse_color(time_ms: f64, bright: Color, dim: Color) -> Color {
    let half = PULSE_CYCLE_MS / 2.0;
    let mut t = (time_ms.rem_euclid(PULSE_CYCLE_MS) / half) as f32;
    if t > 1.0 {
        t = 2.0 - t;
    }
    Color::new(
        bright.r + (dim.r - bright.r) * t,
        bright.g + (dim.g - bright.g) * t,
        bright.b + (dim.b - bright.b) * t,
        bright.a + (dim.a - bright.a) * t,
    )
}

/// One line on a notebook page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageEntry<'a> {
    /// 1-based running number across pages
    pub number: usize,
    /// Index into the full clue list
    pub index: usize,
    pub clue: &'a Clue,
}

#[derive(Debug, Clone)]
pub struct Notebook {
    clues: Vec<Clue>,
    page: usize,
    selected: Option<usize>,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Notebook {
    pub fn new() -> Self {
        Self::with_clues(CLUES.to_vec())
    }

    pub fn with_clues(clues: Vec<Clue>) -> Self {
        Self { clues, page: 0, selected: None }
    }

    /// Reveal a clue by name. True if it was locked before.
    pub fn unlock(&mut self, name: &str) -> bool {
        match self.clues.iter_mut().find(|c| c.name == name) {
            Some(clue) if !clue.unlocked => {
                clue.unlocked = true;
                println!("Clue unlocked: {}", name);
                true
            }
            Some(_) => false,
            None => {
                eprintln!("Unknown clue: {}", name);
                false
            }
        }
    }

    pub fn is_unlocked(&self, name: &str) -> bool {
        self.clues.iter().any(|c| c.name == name && c.unlocked)
    }

    /// Unlocked clues with their index in the full list
    pub fn unlocked(&self) -> impl Iterator<Item = (usize, &Clue)> {
        self.clues.iter().enumerate().filter(|(_, c)| c.unlocked)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked().count()
    }

    pub fn total_pages(&self) -> usize {
        self.unlocked_count().div_ceil(CLUES_PER_PAGE).max(1)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns false on the last page
    pub fn next_page(&mut self) -> bool {
        if self.page + 1 >= self.total_pages() {
            return false;
        }
        self.page += 1;
        self.selected = None;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        self.selected = None;
        true
    }

    pub fn page_entries(&self) -> Vec<PageEntry<'_>> {
        let start = self.page * CLUES_PER_PAGE;
        self.unlocked()
            .enumerate()
            .skip(start)
            .take(CLUES_PER_PAGE)
            .map(|(n, (index, clue))| PageEntry { number: n + 1, index, clue })
            .collect()
    }

    /// Select by index into the full list; locked clues are ignored
    pub fn select(&mut self, index: usize) -> bool {
        match self.clues.get(index) {
            Some(c) if c.unlocked => {
                self.selected = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Clue> {
        self.selected.and_then(|i| self.clues.get(i))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize, unlocked_every: usize) -> Vec<Clue> {
        (0..n)
            .map(|i| Clue { name: "clue", description: "", unlocked: i % unlocked_every == 0 })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let book = Notebook::new();
        assert_eq!(book.unlocked_count(), 2);
        assert_eq!(book.total_pages(), 1);
        assert!(book.is_unlocked("Victim"));
        assert!(!book.is_unlocked("Motive"));
    }

    #[test]
    fn test_unlock_once() {
        let mut book = Notebook::new();
        assert!(book.unlock("Motive"));
        assert!(!book.unlock("Motive"));
        assert!(!book.unlock("No Such Clue"));
        assert!(book.is_unlocked("Motive"));
    }

    #[test]
    fn test_pagination() {
        let mut book = Notebook::with_clues(numbered(30, 1));
        assert_eq!(book.total_pages(), 3);
        assert!(!book.prev_page());
        assert!(book.next_page());
        assert!(book.next_page());
        assert!(!book.next_page());
        assert_eq!(book.page(), 2);

        let entries = book.page_entries();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].number, 21);
        assert_eq!(entries[0].index, 20);
    }

    #[test]
    fn test_entries_skip_locked() {
        // Every other clue unlocked: 12 of 24
        let mut book = Notebook::with_clues(numbered(24, 2));
        assert_eq!(book.total_pages(), 2);
        book.next_page();
        let entries = book.page_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].number, 11);
        assert_eq!(entries[0].index, 20);
        assert_eq!(entries[1].index, 22);
    }

    #[test]
    fn test_select_only_unlocked_and_page_turn_clears() {
        let mut book = Notebook::with_clues(numbered(24, 2));
        assert!(!book.select(1));
        assert!(book.select(2));
        assert_eq!(book.selected_index(), Some(2));
        book.next_page();
        assert_eq!(book.selected_index(), None);
        assert!(!book.select(99));
    }

    #[test]
    fn test_pulse_wave() {
        let bright = Color::new(0.0, 0.0, 0.0, 1.0);
        let dim = Color::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(pulse_color(0.0, bright, dim).r, 0.0);
        assert!((pulse_color(500.0, bright, dim).r - 1.0).abs() < 1e-6);
        assert!((pulse_color(250.0, bright, dim).r - 0.5).abs() < 1e-6);
        assert!((pulse_color(1750.0, bright, dim).r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_scene_clues_exist() {
        let book = Notebook::new();
        for id in crate::scene::SceneId::ALL {
            let d = id.descriptor();
            let names = d.collectibles.iter().filter_map(|c| c.clue)
                .chain(d.npcs.iter().filter_map(|n| n.clue))
                .chain(d.inspects.iter().filter_map(|s| s.clue));
            for name in names {
                assert!(book.clues.iter().any(|c| c.name == name), "missing clue {}", name);
            }
        }
    }
}
