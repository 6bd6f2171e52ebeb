use distribution_sequence::{
    BaseSource, Distribution, ErrorClass, SampleRequest, SamplingError, Sampler, SecondarySource,
    SequenceService, ServiceConfig, SourceBridge, SourceType,
};

fn service() -> SequenceService {
    SequenceService::new(&ServiceConfig::default())
}

#[test]
fn every_distribution_returns_exact_count() {
    let service = service();
    for source_type in ["general", "secure"] {
        for distribution in Distribution::ALL {
            let request = SampleRequest::new(100, source_type, distribution.name(), None, None);
            let response = service.generate(&request).unwrap();
            assert_eq!(response.sequence.len(), 100, "{distribution} over {source_type}");
            assert!(response.sequence.as_slice().iter().all(|v| v.is_finite()));
        }
    }
}

#[test]
fn maximum_count_is_accepted() {
    let response = service()
        .generate(&SampleRequest::new(2_000_000, "general", "uniform", None, None))
        .unwrap();
    assert_eq!(response.count, 2_000_000);
}

#[test]
fn unknown_inputs_are_client_errors() {
    let service = service();

    let error = service
        .generate(&SampleRequest::new(10, "general", "poisson", None, None))
        .unwrap_err();
    assert!(matches!(error, SamplingError::UnknownDistribution { .. }));
    assert_eq!(error.class(), ErrorClass::ClientError);

    let error = service
        .generate(&SampleRequest::new(10, "fast", "uniform", None, None))
        .unwrap_err();
    assert_eq!(error, SamplingError::UnknownSourceType("fast".into()));
}

#[test]
fn same_base_state_reproduces_secondary_samples() {
    let service = service();
    let request = SampleRequest::new(64, "secure", "cauchy", Some(1.0), Some(0.5));

    let first = service
        .generate_with_source(&request, BaseSource::from_seed(SourceType::Secure, 2024))
        .unwrap();
    let second = service
        .generate_with_source(&request, BaseSource::from_seed(SourceType::Secure, 2024))
        .unwrap();
    let other = service
        .generate_with_source(&request, BaseSource::from_seed(SourceType::Secure, 2025))
        .unwrap();

    assert_eq!(first.sequence, second.sequence);
    assert_ne!(first.sequence, other.sequence);
}

#[test]
fn bridge_seed_drives_secondary_family() {
    let bridge = SourceBridge::new(BaseSource::from_seed(SourceType::General, 31));
    let seed = bridge.secondary_seed();

    let response = service()
        .generate_with_source(
            &SampleRequest::new(8, "general", "t-student", Some(4.0), None),
            BaseSource::from_seed(SourceType::General, 31),
        )
        .unwrap();

    let mut secondary = SecondarySource::new(seed);
    let mut sampler = Sampler::create(Distribution::StudentT, Some(4.0), None, &mut secondary).unwrap();
    let expected: Vec<f64> = (0..8).map(|_| sampler.sample().unwrap()).collect();

    assert_eq!(response.sequence.as_slice(), expected.as_slice());
}
