#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ru_readability::{
    DependencyParser, ParseError, ParsedDocument, StubParser, TokenizationService,
    TokenizeConfig, Tokenizer, decode_conllu,
};

pub const SIMPLE_TEXT: &str =
    "Жизнь пренеприятная штука, но сделать ее прекрасной очень нетрудно.";
pub const COMPLEX_TEXT: &str = "Рибоза восстанавливается водородом или амальгамой натрия до соответствующего альдита (рибита) и окисляется по альдегидной группе до соответствующей альдоновой (рибоновой) кислоты, способной циклизоваться в условиях синтеза в рибонолактон[2]. С гидразинами образует озазоны.";

/// Reference parse of `SIMPLE_TEXT`: distances sum to 37 over 11 tokens,
/// with one `nsubj` and one `csubj`.
pub const SIMPLE_CONLLU: &str = "\
# text = Жизнь пренеприятная штука, но сделать ее прекрасной очень нетрудно.
1\tЖизнь\tжизнь\tNOUN\t_\t_\t3\tnsubj\t_\t_
2\tпренеприятная\tпренеприятный\tADJ\t_\t_\t3\tamod\t_\t_
3\tштука\tштука\tNOUN\t_\t_\t0\troot\t_\tSpaceAfter=No
4\t,\t,\tPUNCT\t_\t_\t10\tpunct\t_\t_
5\tно\tно\tCCONJ\t_\t_\t10\tcc\t_\t_
6\tсделать\tсделать\tVERB\t_\t_\t10\tcsubj\t_\t_
7\tее\tона\tPRON\t_\t_\t6\tobj\t_\t_
8\tпрекрасной\tпрекрасный\tADJ\t_\t_\t6\txcomp\t_\t_
9\tочень\tочень\tADV\t_\t_\t10\tadvmod\t_\t_
10\tнетрудно\tнетрудно\tADV\t_\t_\t3\tconj\t_\tSpaceAfter=No
11\t.\t.\tPUNCT\t_\t_\t3\tpunct\t_\t_

";

/// Returns the stored reference parse for `SIMPLE_TEXT` and a stub chain
/// parse for anything else. Counts calls.
#[derive(Default)]
pub struct FixtureParser {
    pub calls: AtomicUsize,
    stub: StubParser,
}

impl FixtureParser {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DependencyParser for FixtureParser {
    fn parse(&self, text: &str) -> Result<ParsedDocument, ParseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text == SIMPLE_TEXT {
            decode_conllu(SIMPLE_CONLLU)
        } else {
            self.stub.parse(text)
        }
    }

    fn name(&self) -> &str {
        "fixture"
    }
}

/// Parser that always produces root-only sentences.
pub struct RootsOnlyParser;

impl DependencyParser for RootsOnlyParser {
    fn parse(&self, _text: &str) -> Result<ParsedDocument, ParseError> {
        decode_conllu("1\tДа\tда\tPART\t_\t_\t0\troot\t_\t_\n\n1\tНет\tнет\tPART\t_\t_\t0\troot\t_\t_\n")
    }
}

/// Parser that fails the way a crashed subprocess would.
pub struct FailingParser;

impl DependencyParser for FailingParser {
    fn parse(&self, _text: &str) -> Result<ParsedDocument, ParseError> {
        Err(ParseError::Process {
            status: "exit status: 1".into(),
            stderr: "Cannot load UDPipe model".into(),
        })
    }
}

pub fn tokenizer_with(parser: Arc<dyn DependencyParser>) -> Arc<Tokenizer> {
    Arc::new(Tokenizer::new(TokenizeConfig::default(), parser))
}

pub fn fixture_service() -> Arc<dyn TokenizationService> {
    tokenizer_with(Arc::new(FixtureParser::default()))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
