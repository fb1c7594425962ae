quantity!(WattHours, suffix: "Wh", precision: 2);
