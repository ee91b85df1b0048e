use rr_tokenize::{tokenize_words, TokenizeConfig};

fn main() {
    let text = "Рибоза восстанавливается водородом до альдита (рибита). С гидразинами образует озазоны.";

    let doc = match tokenize_words(text, &TokenizeConfig::default()) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("tokenization failed: {err}");
            return;
        }
    };

    for (idx, sentence) in doc.sentences().iter().enumerate() {
        println!("sentence {idx}: {sentence:?}");
    }
    println!();
    println!("words: {}", doc.words().count());
}
