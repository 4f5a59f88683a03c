mod test_orientation_basic;
