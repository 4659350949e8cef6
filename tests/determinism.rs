use bleu_core::{compute, smooth, BleuConfig, BleuScorer, Smoothing};

fn tokens(s: &str) -> Vec<String> {
    s.split(' ').map(str::to_string).collect()
}

fn fixture() -> (Vec<String>, Vec<Vec<String>>) {
    let candidate = tokens("It is a guide to action which ensures that the military always obeys the commands of the party");
    let references = vec![
        tokens("It is a guide to action that ensures that the military will forever heed Party commands."),
        tokens("It is the guiding principle which guarantees the military forces always being under the command of the Party."),
        tokens("It is the practical guide for the army always to heed the directions of the party"),
    ];
    (candidate, references)
}

#[test]
fn repeated_scoring_is_bit_identical() {
    let (candidate, references) = fixture();

    let first = compute(&candidate, &references, &[0.25; 4]).unwrap();
    for _ in 0..10 {
        let again = compute(&candidate, &references, &[0.25; 4]).unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }

    let first = smooth(&candidate, &references, &[0.25; 4]).unwrap();
    let again = smooth(&candidate, &references, &[0.25; 4]).unwrap();
    assert_eq!(first.to_bits(), again.to_bits());
}

#[test]
fn caller_tokens_are_not_mutated() {
    let (candidate, references) = fixture();
    let candidate_before = candidate.clone();
    let references_before = references.clone();

    compute(&candidate, &references, &[0.25; 4]).unwrap();
    smooth(&candidate, &references, &[0.25; 4]).unwrap();

    assert_eq!(candidate, candidate_before);
    assert_eq!(references, references_before);
    assert_eq!(candidate[0], "It");
}

#[test]
fn full_breakdown_is_reproducible() {
    let (candidate, references) = fixture();
    let scorer = BleuScorer::new(BleuConfig::default());

    let a = scorer.score(&candidate, &references).unwrap();
    let b = scorer.score(&candidate, &references).unwrap();

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn digest_tracks_normalized_inputs_and_config() {
    let (candidate, references) = fixture();
    let scorer = BleuScorer::default();

    let original = scorer.score(&candidate, &references).unwrap();

    // Case differences vanish after normalization
    let upper: Vec<String> = candidate.iter().map(|t| t.to_uppercase()).collect();
    let shouted = scorer.score(&upper, &references).unwrap();
    assert_eq!(original.input_digest, shouted.input_digest);
    assert_eq!(original.score.to_bits(), shouted.score.to_bits());

    // Token boundaries matter
    let joined = scorer
        .score(&tokens("itis a"), &[tokens("it is a")])
        .unwrap();
    let split_apart = scorer
        .score(&tokens("it isa"), &[tokens("it is a")])
        .unwrap();
    assert_ne!(joined.input_digest, split_apart.input_digest);

    // Config is part of the digest
    let smoothed = BleuScorer::new(BleuConfig::default().with_smoothing(Smoothing::AddOne))
        .score(&candidate, &references)
        .unwrap();
    assert_ne!(original.input_digest, smoothed.input_digest);

    assert!(original.input_digest.as_str().starts_with("sha256:"));
    assert_eq!(original.input_digest.as_str().len(), "sha256:".len() + 64);
}

#[test]
fn entry_points_agree_with_scorer() {
    let (candidate, references) = fixture();

    let plain = BleuScorer::new(BleuConfig::default())
        .score(&candidate, &references)
        .unwrap();
    assert_eq!(
        plain.score.to_bits(),
        compute(&candidate, &references, &[0.25; 4]).unwrap().to_bits()
    );

    let smoothed = BleuScorer::new(BleuConfig::default().with_smoothing(Smoothing::AddOne))
        .score(&candidate, &references)
        .unwrap();
    assert_eq!(
        smoothed.score.to_bits(),
        smooth(&candidate, &references, &[0.25; 4]).unwrap().to_bits()
    );
}
