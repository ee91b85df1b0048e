use rr_tokenize::{tokenize_words, TokenizeConfig};

struct Case {
    name: &'static str,
    input: &'static str,
    cfg: TokenizeConfig,
    expected: &'static [&'static [&'static str]],
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "single_sentence_with_comma",
            input: "Жизнь пренеприятная штука, но сделать ее прекрасной очень нетрудно.",
            cfg: TokenizeConfig::default(),
            expected: &[&[
                "жизнь",
                "пренеприятная",
                "штука",
                "но",
                "сделать",
                "ее",
                "прекрасной",
                "очень",
                "нетрудно",
            ]],
        },
        Case {
            name: "abbreviation_and_initials",
            input: "См. рис. 2 в книге А. С. Пушкина. Там всё есть.",
            cfg: TokenizeConfig::default(),
            expected: &[
                &["см", "рис", "2", "в", "книге", "а", "с", "пушкина"],
                &["там", "всё", "есть"],
            ],
        },
        Case {
            name: "quotes_and_dialogue",
            input: "«Стой!» — крикнул он. Никто не остановился.",
            cfg: TokenizeConfig::default(),
            expected: &[&["стой", "крикнул", "он"], &["никто", "не", "остановился"]],
        },
        Case {
            name: "hyphenated_words_kept",
            input: "Где-то далеко-далеко жил-был кот.",
            cfg: TokenizeConfig::default(),
            expected: &[&["где-то", "далеко-далеко", "жил-был", "кот"]],
        },
        Case {
            name: "hyphenated_words_split",
            input: "Где-то жил кот.",
            cfg: TokenizeConfig {
                join_hyphenated: false,
                ..Default::default()
            },
            expected: &[&["где", "то", "жил", "кот"]],
        },
        Case {
            name: "blank_line_heading",
            input: "Введение\n\nТекст начинается здесь.",
            cfg: TokenizeConfig {
                split_on_blank_lines: true,
                ..Default::default()
            },
            expected: &[&["введение"], &["текст", "начинается", "здесь"]],
        },
        Case {
            name: "yo_and_uppercase",
            input: "ЁЛКА ЗЕЛЁНАЯ!",
            cfg: TokenizeConfig::default(),
            expected: &[&["ёлка", "зелёная"]],
        },
    ];

    for case in cases {
        let doc = tokenize_words(case.input, &case.cfg)
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));

        let expected: Vec<Vec<String>> = case
            .expected
            .iter()
            .map(|sentence| sentence.iter().map(|w| w.to_string()).collect())
            .collect();
        assert_eq!(doc.sentences(), expected.as_slice(), "sentences mismatch for {}", case.name);
    }
}
