use std::fs;
use std::path::{Path, PathBuf};

use amm::icon::{IconResolver, IconSearch, QualifiedIconTheme};
use tempfile::TempDir;

const EDITOR: &str = "accessories-text-editor";

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn touch(path: &Path) -> PathBuf {
    write(path, "");
    path.to_path_buf()
}

/// `icons/` and `pixmaps/` roots inside a fresh temporary directory.
struct Roots {
    _dir: TempDir,
    icons: PathBuf,
    pixmaps: PathBuf,
}

impl Roots {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let icons = dir.path().join("icons");
        let pixmaps = dir.path().join("pixmaps");
        fs::create_dir_all(&icons).unwrap();
        fs::create_dir_all(&pixmaps).unwrap();
        Self {
            _dir: dir,
            icons,
            pixmaps,
        }
    }

    fn theme(&self, directory: &str, index: &str) -> PathBuf {
        let root = self.icons.join(directory);
        write(&root.join("index.theme"), index);
        root
    }

    fn search(&self, theme: &str, size: u32) -> IconSearch {
        let qualified =
            QualifiedIconTheme::new(vec![self.icons.clone(), self.pixmaps.clone()], theme);
        IconSearch::new(size, &qualified)
    }
}

const FAENZA_FIXED: &str = "\
[Icon Theme]
Name=Faenza
Directories=24x24/apps

[24x24/apps]
Size=24
Type=Fixed
";

#[test]
fn themed_icon_is_found() {
    let roots = Roots::new();
    let theme = roots.theme("Faenza", FAENZA_FIXED);
    let icon = touch(&theme.join("24x24/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.resolved_name(EDITOR), icon.to_string_lossy());
}

#[test]
fn flat_directory_is_the_fallback() {
    let roots = Roots::new();
    roots.theme("Faenza", FAENZA_FIXED);
    let icon = touch(&roots.pixmaps.join("accessories-text-editor.svg"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.resolved_name(EDITOR), icon.to_string_lossy());
}

#[test]
fn unknown_icon_keeps_its_name() {
    let roots = Roots::new();
    roots.theme("Faenza", FAENZA_FIXED);

    let search = roots.search("Faenza", 24);
    assert_eq!(search.resolved_name(EDITOR), EDITOR);
}

#[test]
fn closest_threshold_size_wins() {
    let roots = Roots::new();
    let theme = roots.theme(
        "Faenza",
        "\
[Icon Theme]
Name=Faenza
Directories=48x48/apps,16x16/apps

[48x48/apps]
Size=48
Type=Threshold
Threshold=2

[16x16/apps]
Size=16
Type=Threshold
Threshold=2
",
    );
    touch(&theme.join("48x48/apps/accessories-text-editor.png"));
    let small = touch(&theme.join("16x16/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.resolved_name(EDITOR), small.to_string_lossy());
}

#[test]
fn exact_match_beats_earlier_candidates() {
    let roots = Roots::new();
    let theme = roots.theme(
        "Faenza",
        "\
[Icon Theme]
Name=Faenza
Directories=22x22/apps,scalable/apps,24x24/apps

[22x22/apps]
Size=22
Type=Fixed

[scalable/apps]
Size=48
Type=Scalable
MinSize=32
MaxSize=256

[24x24/apps]
Size=24
Type=Fixed
",
    );
    touch(&theme.join("22x22/apps/accessories-text-editor.png"));
    touch(&theme.join("scalable/apps/accessories-text-editor.svg"));
    let exact = touch(&theme.join("24x24/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.resolved_name(EDITOR), exact.to_string_lossy());
}

#[test]
fn distance_ties_go_to_the_first_candidate() {
    let roots = Roots::new();
    let theme = roots.theme(
        "Faenza",
        "\
[Icon Theme]
Name=Faenza
Directories=20x20/apps,28x28/apps

[20x20/apps]
Size=20
Type=Fixed

[28x28/apps]
Size=28
Type=Fixed
",
    );
    let first = touch(&theme.join("20x20/apps/accessories-text-editor.png"));
    touch(&theme.join("28x28/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.resolved_name(EDITOR), first.to_string_lossy());
}

#[test]
fn invalid_subdirectories_are_never_chosen() {
    let roots = Roots::new();
    let theme = roots.theme(
        "Faenza",
        "\
[Icon Theme]
Name=Faenza
Directories=broken

[broken]
Size=24
Type=Elastic
",
    );
    touch(&theme.join("broken/accessories-text-editor.png"));
    let flat = touch(&roots.pixmaps.join("accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.resolved_name(EDITOR), flat.to_string_lossy());
}

#[test]
fn png_is_preferred_over_svg_and_xpm() {
    let roots = Roots::new();
    let theme = roots.theme("Faenza", FAENZA_FIXED);
    touch(&theme.join("24x24/apps/accessories-text-editor.xpm"));
    touch(&theme.join("24x24/apps/accessories-text-editor.svg"));
    let png = touch(&theme.join("24x24/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.resolved_name(EDITOR), png.to_string_lossy());
}

#[test]
fn name_with_extension_is_not_extended_twice() {
    let roots = Roots::new();
    let icon = touch(&roots.pixmaps.join("vlc.png"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.resolved_name("vlc.png"), icon.to_string_lossy());
}

#[test]
fn absolute_and_empty_names_are_returned_as_given() {
    let roots = Roots::new();
    let search = roots.search("Faenza", 24);
    assert_eq!(
        search.resolved_name("/opt/app/icon.png"),
        "/opt/app/icon.png"
    );
    assert_eq!(search.resolved_name(""), "");
}

#[test]
fn parent_theme_is_searched() {
    let roots = Roots::new();
    roots.theme(
        "Faenza",
        "[Icon Theme]\nName=Faenza\nInherits=gnome\nDirectories=\n",
    );
    let gnome = roots.theme(
        "gnome",
        "[Icon Theme]\nName=GNOME\nDirectories=24x24/apps\n\n[24x24/apps]\nSize=24\nType=Fixed\n",
    );
    let icon = touch(&gnome.join("24x24/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    let names: Vec<&str> = search.themes().iter().map(|t| t.internal_name()).collect();
    assert_eq!(names, vec!["Faenza", "gnome"]);
    assert_eq!(search.resolved_name(EDITOR), icon.to_string_lossy());
}

#[test]
fn implicit_hicolor_parent() {
    let roots = Roots::new();
    roots.theme("Faenza", "[Icon Theme]\nName=Faenza\nDirectories=\n");
    let hicolor = roots.theme(
        "hicolor",
        "[Icon Theme]\nName=Hicolor\nDirectories=24x24/apps\n\n[24x24/apps]\nSize=24\nType=Fixed\n",
    );
    let icon = touch(&hicolor.join("24x24/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.themes().len(), 2);
    assert_eq!(search.themes()[1].name(), "Hicolor");
    assert_eq!(search.resolved_name(EDITOR), icon.to_string_lossy());
}

#[test]
fn grandparents_are_not_followed() {
    let roots = Roots::new();
    roots.theme(
        "Faenza",
        "[Icon Theme]\nName=Faenza\nInherits=gnome\nDirectories=\n",
    );
    roots.theme("gnome", "[Icon Theme]\nName=GNOME\nDirectories=\n");
    let hicolor = roots.theme(
        "hicolor",
        "[Icon Theme]\nName=Hicolor\nDirectories=24x24/apps\n\n[24x24/apps]\nSize=24\nType=Fixed\n",
    );
    touch(&hicolor.join("24x24/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.themes().len(), 2);
    assert_eq!(search.resolved_name(EDITOR), EDITOR);
}

#[test]
fn hicolor_has_no_parent() {
    let roots = Roots::new();
    roots.theme("hicolor", "[Icon Theme]\nName=Hicolor\nDirectories=\n");

    let search = roots.search("hicolor", 24);
    assert_eq!(search.themes().len(), 1);
    assert_eq!(search.themes()[0].name(), "Hicolor");
}

#[test]
fn missing_theme_becomes_the_placeholder() {
    let roots = Roots::new();
    let flat = touch(&roots.pixmaps.join("accessories-text-editor.xpm"));

    let search = roots.search("Nonexistent", 24);
    let names: Vec<&str> = search.themes().iter().map(|t| t.name()).collect();
    // Neither the requested theme nor its implicit hicolor parent exists.
    assert_eq!(names, vec!["", ""]);
    assert_eq!(search.themes()[0].parents(), ["Hicolor"]);
    assert!(search.themes()[0].directories().is_empty());
    assert_eq!(search.resolved_name(EDITOR), flat.to_string_lossy());
}

#[test]
fn missing_theme_still_uses_hicolor() {
    let roots = Roots::new();
    let hicolor = roots.theme(
        "hicolor",
        "[Icon Theme]\nName=Hicolor\nDirectories=24x24/apps\n\n[24x24/apps]\nSize=24\nType=Fixed\n",
    );
    let icon = touch(&hicolor.join("24x24/apps/vlc.png"));

    let search = roots.search("Faenzaa", 24);
    assert_eq!(search.themes().len(), 2);
    assert_eq!(search.themes()[1].name(), "Hicolor");
    assert_eq!(search.resolved_name("vlc"), icon.to_string_lossy());
}

#[test]
fn directory_without_index_is_not_a_theme() {
    let roots = Roots::new();
    touch(&roots.icons.join("Faenza/24x24/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    assert_eq!(search.themes()[0].name(), "");
    assert_eq!(search.resolved_name(EDITOR), EDITOR);
}

#[test]
fn theme_is_found_by_display_name() {
    let roots = Roots::new();
    let theme = roots.theme(
        "faenza-dark",
        "[Icon Theme]\nName=Faenza Dark\nDirectories=24x24/apps\n\n[24x24/apps]\nSize=24\nType=Fixed\n",
    );
    let icon = touch(&theme.join("24x24/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza Dark", 24);
    assert_eq!(search.themes()[0].internal_name(), "faenza-dark");
    assert_eq!(search.resolved_name(EDITOR), icon.to_string_lossy());
}

#[test]
fn resolution_is_repeatable() {
    let roots = Roots::new();
    let theme = roots.theme("Faenza", FAENZA_FIXED);
    touch(&theme.join("24x24/apps/accessories-text-editor.png"));

    let search = roots.search("Faenza", 24);
    let first = search.resolved_name(EDITOR);
    assert_eq!(search.resolved_name(EDITOR), first);
    assert_eq!(search.resolved_name("missing"), "missing");
    assert_eq!(search.resolved_name("missing"), "missing");
}

const FIXED_24: &str = "[24x24/apps]\nSize=24\nType=Fixed\n";

fn two_roots() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first");
    let second = dir.path().join("second");
    fs::create_dir_all(&first).unwrap();
    fs::create_dir_all(&second).unwrap();
    (dir, first, second)
}

#[test]
fn earlier_root_provides_the_theme() {
    let (_dir, first, second) = two_roots();
    write(
        &first.join("Faenza/index.theme"),
        &format!("[Icon Theme]\nName=Faenza First\nDirectories=24x24/apps\n\n{FIXED_24}"),
    );
    write(
        &second.join("Faenza/index.theme"),
        &format!("[Icon Theme]\nName=Faenza Second\nDirectories=24x24/apps\n\n{FIXED_24}"),
    );

    let qualified = QualifiedIconTheme::new(vec![first, second], "Faenza");
    assert_eq!(qualified.icon_theme_from_name("Faenza").name(), "Faenza First");
    assert_eq!(qualified.theme_with_parent()[0].name(), "Faenza First");
}

#[test]
fn icons_are_found_under_any_root() {
    let (_dir, first, second) = two_roots();
    write(
        &first.join("Faenza/index.theme"),
        &format!("[Icon Theme]\nName=Faenza\nDirectories=24x24/apps\n\n{FIXED_24}"),
    );
    let icon = touch(&second.join("Faenza/24x24/apps/accessories-text-editor.png"));

    let qualified = QualifiedIconTheme::new(vec![first, second], "Faenza");
    let search = IconSearch::new(24, &qualified);
    assert_eq!(search.resolved_name(EDITOR), icon.to_string_lossy());
}

#[test]
fn earlier_root_wins_a_tie() {
    let (_dir, first, second) = two_roots();
    write(
        &first.join("Faenza/index.theme"),
        "[Icon Theme]\nName=Faenza\nDirectories=16x16/apps\n\n[16x16/apps]\nSize=16\nType=Fixed\n",
    );
    let earlier = touch(&first.join("Faenza/16x16/apps/accessories-text-editor.png"));
    touch(&second.join("Faenza/16x16/apps/accessories-text-editor.png"));

    let qualified = QualifiedIconTheme::new(vec![first.clone(), second.clone()], "Faenza");
    assert_eq!(
        IconSearch::new(24, &qualified).resolved_name(EDITOR),
        earlier.to_string_lossy()
    );
    assert_eq!(
        IconSearch::new(16, &qualified).resolved_name(EDITOR),
        earlier.to_string_lossy()
    );
}

#[test]
fn subdirectory_order_comes_before_root_order() {
    let (_dir, first, second) = two_roots();
    write(
        &first.join("Faenza/index.theme"),
        "[Icon Theme]\nName=Faenza\nDirectories=22x22/apps,26x26/apps\n\n\
         [22x22/apps]\nSize=22\nType=Fixed\n\n[26x26/apps]\nSize=26\nType=Fixed\n",
    );
    touch(&first.join("Faenza/26x26/apps/accessories-text-editor.png"));
    let listed_first = touch(&second.join("Faenza/22x22/apps/accessories-text-editor.png"));

    // Both are two pixels off; the subdirectory listed first wins even
    // though its file lives under the later root.
    let qualified = QualifiedIconTheme::new(vec![first, second], "Faenza");
    assert_eq!(
        IconSearch::new(24, &qualified).resolved_name(EDITOR),
        listed_first.to_string_lossy()
    );
}

#[test]
fn search_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IconSearch>();
    assert_send_sync::<QualifiedIconTheme>();
}
