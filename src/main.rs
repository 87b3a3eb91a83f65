use opaque_bridge::{
    AutogradExcludeGuard, ConversionConfig, ForeignAccess, ForeignTensor, Tensor, TensorOptions,
    dense_to_opaque, foreign_from_opaque, foreign_from_tensor, new_with_foreign, opaque_to_dense,
};
use rand::{SeedableRng, rngs::StdRng};

fn main() {
    // - - - - Dense to opaque and back - - - -
    let dense = Tensor::from_f32(vec![2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("demo tensor");
    let opaque = dense_to_opaque(&dense, &ConversionConfig::default().build())
        .expect("dense_to_opaque");
    println!("dense:  {:?}", dense);
    println!("opaque: {:?}", opaque);

    let back = opaque_to_dense(&opaque).expect("opaque_to_dense");
    println!("round trip: {:?}", back.to_f32_vec().expect("float data"));

    // - - - - Foreign results returned to the runtime - - - -
    let mut rng = StdRng::seed_from_u64(727);
    let result = new_with_foreign(
        ForeignTensor::uniform(vec![3, 4], -1.0, 1.0, &mut rng),
        &TensorOptions::new(),
    );
    let shared = result.clone();

    // Foreign operators run below autograd
    let _below_autograd = AutogradExcludeGuard::new();
    foreign_from_opaque(&result).set_f32(0, 42.0);
    println!("seen through copy: {}", foreign_from_opaque(&shared).get_f32(0));

    // - - - - One entry point for either provenance - - - -
    for t in [&dense, &result] {
        let foreign = foreign_from_tensor(t);
        println!(
            "dims {:?} type {:?} borrowed {}",
            foreign.get_dims(),
            foreign.get_data_type(),
            foreign.is_borrowed()
        );
    }
}
