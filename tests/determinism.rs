use hashid::{
    normalize_default, CharMapRegistry, DigestAlgorithm, GenerateOption, GenerationConfig,
    Generator,
};

fn all_algorithm_configs() -> Vec<GenerationConfig> {
    DigestAlgorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let cfg = GenerationConfig::default().with_algorithm(algorithm);
            if algorithm.requires_key() {
                cfg.with_hmac_key("determinism-key")
            } else {
                cfg
            }
        })
        .collect()
}

#[test]
fn repeated_calls_are_identical() {
    let registry = CharMapRegistry::bundled();
    let generator = Generator::new(&registry);

    for cfg in all_algorithm_configs() {
        let first = generator
            .generate("Deterministic  Input ©", &cfg)
            .expect("first");
        for _ in 0..50 {
            let again = generator
                .generate("Deterministic  Input ©", &cfg)
                .expect("again");
            assert_eq!(first, again, "{:?}", cfg.algorithm());
        }
    }
}

#[test]
fn independent_registries_agree() {
    let a = CharMapRegistry::bundled();
    let b = CharMapRegistry::bundled();
    let cfg = GenerationConfig::default();

    for input in ["A81758FFFE04©E4F5", "1000円= 711.56₹", "", "   "] {
        let left = Generator::new(&a).generate(input, &cfg).expect("a");
        let right = Generator::new(&b).generate(input, &cfg).expect("b");
        assert_eq!(left, right, "input {input:?}");
    }
}

#[test]
fn equivalent_spellings_share_an_identifier() {
    let registry = CharMapRegistry::bundled();
    let generator = Generator::new(&registry);

    for cfg in all_algorithm_configs() {
        let ids: Vec<String> = [
            " Hello   world! ",
            "hello WORLD",
            "Hello\tWorld",
            "HELLO world*",
        ]
        .into_iter()
        .map(|input| generator.generate(input, &cfg).expect("generate"))
        .collect();
        assert!(ids.windows(2).all(|w| w[0] == w[1]), "{ids:?}");
    }
}

#[test]
fn normalization_is_idempotent_end_to_end() {
    let registry = CharMapRegistry::bundled();
    let generator = Generator::new(&registry);
    let cfg = GenerationConfig::default();

    for input in [
        "IOT.devicetype:decentlab-dl-lp8p-001-US915-co2-sensor",
        "Straße ΑΘΗΝΑ Ǉubljana",
        "special@#-$-%^-&*-chars",
    ] {
        let normalized = normalize_default(input).expect("normalize");
        assert_eq!(
            generator.generate(input, &cfg).expect("raw"),
            generator.generate(&normalized, &cfg).expect("normalized"),
            "input {input:?}"
        );
    }
}

#[test]
fn option_order_is_the_only_thing_that_matters() {
    let a = GenerationConfig::from_options([
        GenerateOption::Normalization(false),
        GenerateOption::Algorithm(DigestAlgorithm::Sha256),
        GenerateOption::UuidVersion(8),
    ]);
    let b = GenerationConfig::default()
        .with_algorithm(DigestAlgorithm::Sha256)
        .with_uuid_version(8)
        .with_normalization(false);

    let registry = CharMapRegistry::bundled();
    let generator = Generator::new(&registry);
    assert_eq!(
        generator.generate("Same Input", &a).expect("a"),
        generator.generate("Same Input", &b).expect("b")
    );
}
