use dict_core::Shell;
use std::io::Cursor;
use tempfile::tempdir;

fn run_on(shell: &mut Shell, script: &str) -> String {
    let mut out = Vec::new();
    shell.run(Cursor::new(script), &mut out).expect("shell run");
    String::from_utf8(out).expect("utf8 output")
}

fn run(script: &str) -> (Shell, String) {
    let mut shell = Shell::new();
    let out = run_on(&mut shell, script);
    (shell, out)
}

#[test]
fn stat_reports_counts_and_average() {
    let (_, out) = run(
        "createdict en\n\
         addword en cat кот кошка\n\
         addword en dog пёс\n\
         stat en\n",
    );
    assert_eq!(
        out,
        "Words: 2\nTranslations: 3\nAverage translations per word: 1.5\n"
    );
}

#[test]
fn stat_of_empty_dictionary() {
    let (_, out) = run("createdict en\nstat en\nstat nope\n");
    assert_eq!(
        out,
        "Words: 0\nTranslations: 0\nAverage translations per word: 0\n<ERROR: dictionary not found>\n"
    );
}

#[test]
fn duplicate_createdict_keeps_one_dictionary() {
    let (shell, out) = run("createdict a\ncreatedict a\nlistdicts\n");
    assert_eq!(out, "<ERROR: dictionary already exists>\na\n");
    assert_eq!(shell.dicts().len(), 1);
}

#[test]
fn listdicts_sorted_and_empty_marker() {
    let (_, out) = run("listdicts\ncreatedict ru\ncreatedict en\nlistdicts\ndeletedict ru\nlistdicts\n");
    assert_eq!(out, "<EMPTY>\nen\nru\nen\n");
}

#[test]
fn addword_validation_order() {
    let (shell, out) = run(
        "addword\n\
         addword en\n\
         addword en cat кот\n\
         createdict en\n\
         addword en cat\n\
         addword en cat кот\n\
         addword en cat кошка\n",
    );
    assert_eq!(
        out,
        "<ERROR: invalid arguments for addword>\n\
         <ERROR: invalid arguments for addword>\n\
         <ERROR: dictionary not found>\n\
         <ERROR: no translations provided>\n\
         <ERROR: word already exists>\n"
    );
    let cat = shell.dicts().get("en").unwrap().translations("cat").unwrap();
    assert_eq!(cat.len(), 1);
}

#[test]
fn translations_are_listed_sorted_and_deduplicated() {
    let (_, out) = run(
        "createdict en\n\
         addword en cat кошка кот кошка\n\
         addtranslation en cat котик\n\
         addtranslation en cat кот\n\
         findtranslations en cat\n\
         addword en bat летучая_мышь\n\
         listwords en\n",
    );
    assert_eq!(
        out,
        "кот котик кошка\n\
         bat летучая_мышь\n\
         cat кот котик кошка\n"
    );
}

#[test]
fn word_level_errors_use_collapsed_messages() {
    let (_, out) = run(
        "addtranslation en cat кот\n\
         createdict en\n\
         addtranslation en cat кот\n\
         removetranslation none cat кот\n\
         removetranslation en cat кот\n\
         addword en cat кот\n\
         removetranslation en cat пёс\n\
         deleteword en dog\n\
         deleteword none dog\n\
         findtranslations en dog\n\
         findtranslations none cat\n\
         addtranslation en cat\n",
    );
    assert_eq!(
        out,
        "<ERROR: dictionary or word not found>\n\
         <ERROR: dictionary or word not found>\n\
         <ERROR: dictionary, word or translation not found>\n\
         <ERROR: dictionary, word or translation not found>\n\
         <ERROR: dictionary, word or translation not found>\n\
         <ERROR: dictionary or word not found>\n\
         <ERROR: dictionary or word not found>\n\
         <ERROR: dictionary or word not found>\n\
         <ERROR: dictionary or word not found>\n\
         <ERROR: invalid arguments for addtranslation>\n"
    );
}

#[test]
fn removing_every_translation_removes_the_word() {
    let (shell, out) = run(
        "createdict en\n\
         addword en cat кот кошка\n\
         removetranslation en cat кот\n\
         listwords en\n\
         removetranslation en cat кошка\n\
         listwords en\n\
         findtranslations en cat\n",
    );
    assert_eq!(
        out,
        "cat кошка\n<EMPTY>\n<ERROR: dictionary or word not found>\n"
    );
    assert!(!shell.dicts().get("en").unwrap().contains_word("cat"));
}

#[test]
fn deleteword_and_deletedict() {
    let (shell, out) = run(
        "createdict en\n\
         addword en cat кот\n\
         deleteword en cat\n\
         listwords en\n\
         deletedict en\n\
         listwords en\n",
    );
    assert_eq!(out, "<EMPTY>\n<ERROR: dictionary not found>\n");
    assert!(shell.dicts().is_empty());
}

#[test]
fn trailing_tokens_are_ignored() {
    let (shell, out) = run("createdict en extra tokens\nlistdicts now please\n");
    assert_eq!(out, "en\n");
    assert!(!shell.dicts().contains("extra"));
}

#[test]
fn merge_unions_sources() {
    let (_, out) = run(
        "createdict a\n\
         createdict b\n\
         addword a cat кот\n\
         addword a dog пёс\n\
         addword b cat кошка\n\
         addword b fox лиса\n\
         merge m 2 a b\n\
         listwords m\n",
    );
    assert_eq!(out, "cat кот кошка\ndog пёс\nfox лиса\n");
}

#[test]
fn merge_with_missing_source_creates_nothing() {
    let (shell, out) = run("createdict x\nmerge m 2 x y\nmerge m 2 y x\n");
    assert_eq!(
        out,
        "<ERROR: dictionary not found>\n<ERROR: dictionary not found>\n"
    );
    assert!(!shell.dicts().contains("m"));
}

#[test]
fn merge_argument_and_count_errors() {
    let (shell, out) = run(
        "createdict a\n\
         createdict b\n\
         merge\n\
         merge m\n\
         merge m two a b\n\
         merge m 1 a\n\
         merge m -4 a b\n\
         merge m 3 a b\n\
         merge a 2 a b\n",
    );
    assert_eq!(
        out,
        "<ERROR: invalid arguments for merge>\n\
         <ERROR: invalid arguments for merge>\n\
         <ERROR: invalid arguments for merge>\n\
         <ERROR: invalid count>\n\
         <ERROR: invalid count>\n\
         <ERROR: invalid count>\n\
         <ERROR: dictionary already exists>\n"
    );
    assert_eq!(shell.dicts().len(), 2);
}

#[test]
fn source_check_precedes_target_check() {
    let (_, out) = run("createdict a\ncreatedict m\nsubtract m 2 a ghost\n");
    assert_eq!(out, "<ERROR: dictionary not found>\n");
}

#[test]
fn subtract_keeps_words_absent_elsewhere() {
    let (_, out) = run(
        "createdict a\n\
         createdict b\n\
         createdict c\n\
         addword a cat кот\n\
         addword a dog пёс собака\n\
         addword a fox лиса\n\
         addword b cat другое\n\
         addword c fox лис\n\
         subtract s 3 a b c\n\
         listwords s\n\
         subtract t 2 b a\n\
         listwords t\n",
    );
    assert_eq!(out, "dog пёс собака\n<EMPTY>\n");
}

#[test]
fn symdiff_keeps_words_in_exactly_one_source() {
    let (_, out) = run(
        "createdict a\n\
         createdict b\n\
         createdict c\n\
         addword a cat кот\n\
         addword a dog пёс\n\
         addword b cat кошка\n\
         addword b fox лиса\n\
         addword c dog собака\n\
         addword c owl сова\n\
         symdiff d 3 a b c\n\
         listwords d\n\
         symdiff e 2 a a\n\
         listwords e\n",
    );
    assert_eq!(out, "fox лиса\nowl сова\n<EMPTY>\n");
}

#[test]
fn findcommon_behaviour() {
    let (shell, out) = run(
        "createdict en\n\
         addword en big большой крупный великий\n\
         addword en large большой крупный\n\
         addword en small маленький\n\
         findcommon en 1 big\n\
         findcommon en 2 big large\n\
         findcommon en 2 big small\n\
         findcommon en 2 big tiny\n\
         findcommon en 3 big large\n\
         findcommon en 0 big\n\
         findcommon none 1 big\n\
         findcommon none 5 big\n\
         findcommon en\n",
    );
    assert_eq!(
        out,
        "большой великий крупный\n\
         большой крупный\n\
         <EMPTY>\n\
         <ERROR: dictionary or word(s) not found>\n\
         <ERROR: invalid count>\n\
         <ERROR: invalid count>\n\
         <ERROR: dictionary or word(s) not found>\n\
         <ERROR: dictionary or word(s) not found>\n\
         <ERROR: invalid arguments for findcommon>\n"
    );
    assert_eq!(shell.dicts().len(), 1);
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("en.txt");
    let path = path.display();

    let (shell, out) = run(&format!(
        "createdict en\n\
         addword en cat кот кошка\n\
         addword en dog пёс\n\
         save en {path}\n\
         load copy {path}\n\
         listwords copy\n"
    ));
    assert_eq!(out, "cat кот кошка\ndog пёс\n");
    assert_eq!(shell.dicts().get("en").unwrap(), shell.dicts().get("copy").unwrap());
}

#[test]
fn save_errors_are_combined() {
    let dir = tempdir().unwrap();
    let missing_dir = dir.path().join("no").join("such.txt");
    let (_, out) = run(&format!(
        "save ghost {}\ncreatedict en\nsave en {}\nsave en\n",
        dir.path().join("x.txt").display(),
        missing_dir.display()
    ));
    assert_eq!(
        out,
        "<ERROR: dictionary not found or file error>\n\
         <ERROR: dictionary not found or file error>\n\
         <ERROR: invalid arguments for save>\n"
    );
}

#[test]
fn load_errors() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty.txt");
    std::fs::write(&empty, "only_words\nno_translations\n").unwrap();
    let good = dir.path().join("good.txt");
    std::fs::write(&good, "cat кот\n").unwrap();

    let (shell, out) = run(&format!(
        "load a {}\nload a {}\ncreatedict b\nload b {}\nload a\n",
        dir.path().join("missing.txt").display(),
        empty.display(),
        good.display()
    ));
    assert_eq!(
        out,
        "<ERROR: file not found or invalid format>\n\
         <ERROR: file not found or invalid format>\n\
         <ERROR: dictionary already exists>\n\
         <ERROR: invalid arguments for load>\n"
    );
    assert!(shell.dicts().get("b").unwrap().is_empty());
    assert!(!shell.dicts().contains("a"));
}

#[test]
fn saving_overwrites_an_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "stale old\nlines here\n").unwrap();

    let mut shell = Shell::new();
    run_on(
        &mut shell,
        &format!("createdict en\naddword en cat кот\nsave en {}\n", path.display()),
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "cat кот\n");
}

#[test]
fn invalid_utf8_line_does_not_end_the_session() {
    let mut input = b"createdict a\ncreatedict ".to_vec();
    input.extend_from_slice(&[0xff, 0xfe]);
    input.extend_from_slice(b"\ncreatedict b\nlistdicts\n");

    let mut shell = Shell::new();
    let mut out = Vec::new();
    shell.run(Cursor::new(input), &mut out).expect("shell run");

    assert!(shell.dicts().contains("a"));
    assert!(shell.dicts().contains("b"));
    assert_eq!(shell.dicts().len(), 3);
    let out = String::from_utf8(out).expect("utf8 output");
    assert!(out.starts_with("a\nb\n"));
}
