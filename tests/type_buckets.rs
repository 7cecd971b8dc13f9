//! Exact-type registry buckets across a mixed dwelling hierarchy

mod common;

use common::{object, Cabin, Cottage, Dwelling, House, Person, SAMPLE_SIZE};
use std::rc::Rc;
use tether::{Object, RelationMapper, TypeTag};

type MixedFixture = (
    RelationMapper,
    Rc<Person>,
    Object,
    Vec<(Rc<House>, Object)>,
    Vec<(Rc<Cabin>, Object)>,
);

fn mixed_mapper() -> MixedFixture {
    let mut mapper = RelationMapper::new();
    let (person, person_obj) = object(Person::new());

    let mut houses = Vec::new();
    let mut cabins = Vec::new();
    for _ in 0..SAMPLE_SIZE {
        let (house, house_obj) = object(House::new());
        mapper.add(&person_obj, &house_obj).unwrap();
        houses.push((house, house_obj));

        let (cabin, cabin_obj) = object(Cabin::new());
        mapper.add(&person_obj, &cabin_obj).unwrap();
        cabins.push((cabin, cabin_obj));
    }

    (mapper, person, person_obj, houses, cabins)
}

#[test]
fn test_many_set_mixes_runtime_types() {
    let (mut mapper, person, person_obj, _, _) = mixed_mapper();

    assert_eq!(mapper.many(&person.houses).unwrap().len(), SAMPLE_SIZE * 2);

    let (cottage, cottage_obj) = object(Cottage::new());
    mapper.add(&person_obj, &cottage_obj).unwrap();

    assert_eq!(
        mapper.many(&person.houses).unwrap().len(),
        SAMPLE_SIZE * 2 + 1
    );
    let owner = mapper.one(&cottage.person).unwrap().unwrap();
    assert!(tether::same_object(&owner, &person_obj));
}

#[test]
fn test_buckets_are_exact_per_type() {
    let (mapper, _, _, _, _) = mixed_mapper();

    assert_eq!(
        mapper.objects_of_type(TypeTag::of::<House>()).len(),
        SAMPLE_SIZE
    );
    assert_eq!(
        mapper.objects_of_type(TypeTag::of::<Cabin>()).len(),
        SAMPLE_SIZE
    );
    assert!(mapper.objects_of_type(TypeTag::of::<Cottage>()).is_empty());
}

#[test]
fn test_no_bucket_for_the_common_trait() {
    let (mapper, _, _, _, _) = mixed_mapper();

    // Houses and cabins all implement Dwelling, but only exact runtime
    // types get buckets.
    assert!(mapper
        .objects_of_type(TypeTag::of::<dyn Dwelling>())
        .is_empty());
}

#[test]
fn test_typed_bucket_view_downcasts() {
    let (mapper, _, _, _, _) = mixed_mapper();

    let houses: Vec<Rc<House>> = mapper.objects_of::<House>();
    assert_eq!(houses.len(), SAMPLE_SIZE);

    let cottages: Vec<Rc<Cottage>> = mapper.objects_of::<Cottage>();
    assert!(cottages.is_empty());
}

#[test]
fn test_removing_one_type_leaves_the_other_bucket() {
    let (mut mapper, person, person_obj, _, cabins) = mixed_mapper();

    for (_, cabin_obj) in &cabins {
        mapper.remove(&person_obj, cabin_obj).unwrap();
    }

    assert!(mapper.objects_of_type(TypeTag::of::<Cabin>()).is_empty());
    assert_eq!(
        mapper.objects_of_type(TypeTag::of::<House>()).len(),
        SAMPLE_SIZE
    );
    assert_eq!(mapper.many(&person.houses).unwrap().len(), SAMPLE_SIZE);
    assert_eq!(mapper.objects_of_type(TypeTag::of::<Person>()).len(), 1);
}
