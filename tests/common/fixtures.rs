/// Small LID dataset: four rows per language, the first one code-mixed.
pub const LID_CSV: &str = "text,lang
नमस्ते দুনিয়া,hi
नमस्ते दुनिया,hi
दुनिया नमस्ते,hi
नमस्ते,hi
বাংলা ভাষা,bn
ভাষা বাংলা,bn
বাংলা,bn
ভাষা,bn
வணக்கம் உலகம்,ta
உலகம் வணக்கம்,ta
வணக்கம்,ta
உலகம்,ta
";

/// News dataset with two labels across three languages.
pub const NEWS_CSV: &str = "text,lang,label
खेल मैच,hi,sports
मैच खेल,hi,sports
संसद चुनाव,hi,politics
चुनाव संसद,hi,politics
খেলা ম্যাচ,bn,sports
ম্যাচ খেলা,bn,sports
সংসদ নির্বাচন,bn,politics
নির্বাচন সংসদ,bn,politics
விளையாட்டு போட்டி,ta,sports
போட்டி விளையாட்டு,ta,sports
தேர்தல் சட்டமன்றம்,ta,politics
சட்டமன்றம் தேர்தல்,ta,politics
";

/// Whitespace word-level tokenizer; anything outside the vocabulary is `[UNK]`.
pub const TOKENIZER_JSON: &str = r#"{
  "version": "1.0",
  "truncation": null,
  "padding": null,
  "added_tokens": [],
  "normalizer": null,
  "pre_tokenizer": { "type": "WhitespaceSplit" },
  "post_processor": null,
  "decoder": null,
  "model": {
    "type": "WordLevel",
    "vocab": {
      "[UNK]": 0,
      "नमस्ते": 1, "दुनिया": 2, "খেলা": 3, "ম্যাচ": 4, "বাংলা": 5, "ভাষা": 6,
      "வணக்கம்": 7, "உலகம்": 8, "खेल": 9, "मैच": 10, "संसद": 11, "चुनाव": 12,
      "সংসদ": 13, "নির্বাচন": 14, "விளையாட்டு": 15, "போட்டி": 16, "தேர்தல்": 17, "சட்டமன்றம்": 18
    },
    "unk_token": "[UNK]"
  }
}"#;
