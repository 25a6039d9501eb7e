//! Embedded entity templates
//!
//! Rendered with Handlebars against the entity descriptor:
//!
//! - `entityName`, `className`, `moduleClass`, `camelName`, `kebabName`
//! - `routePath`, `title`
//! - `fields`: `[{ name, type, tsType }]`
//!
//! Vue and Angular interpolation (`{{ item.name }}`) is produced by the
//! `bind` helper so it does not collide with Handlebars syntax.

/// `entity/model.ts.hbs`
pub const MODEL_TS: &str = r#"import { Entity, PrimaryGeneratedColumn, Column } from 'typeorm';

@Entity('{{routePath}}')
export class {{className}} {
  @PrimaryGeneratedColumn()
  id: number;
{{#each fields}}

  @Column()
  {{name}}: {{tsType}};
{{/each}}
}
"#;

/// `entity/service.ts.hbs`
pub const SERVICE_TS: &str = r#"import { Injectable, NotFoundException } from '@nestjs/common';
import { InjectRepository } from '@nestjs/typeorm';
import { Repository } from 'typeorm';
import { {{className}} } from './{{entityName}}.model';

@Injectable()
export class {{className}}Service {
  constructor(
    @InjectRepository({{className}})
    private readonly repository: Repository<{{className}}>,
  ) {}

  findAll(): Promise<{{className}}[]> {
    return this.repository.find();
  }

  async findOne(id: number): Promise<{{className}}> {
    const found = await this.repository.findOneBy({ id });
    if (!found) {
      throw new NotFoundException(`{{className}} ${id} not found`);
    }
    return found;
  }

  create(data: Partial<{{className}}>): Promise<{{className}}> {
    return this.repository.save(this.repository.create(data));
  }

  async update(id: number, data: Partial<{{className}}>): Promise<{{className}}> {
    await this.findOne(id);
    await this.repository.update(id, data);
    return this.findOne(id);
  }

  async remove(id: number): Promise<void> {
    await this.findOne(id);
    await this.repository.delete(id);
  }
}
"#;

/// `entity/controller.ts.hbs`
pub const CONTROLLER_TS: &str = r#"import { Body, Controller, Delete, Get, Param, ParseIntPipe, Post, Put } from '@nestjs/common';
import { ApiTags } from '@nestjs/swagger';
import { {{className}} } from './{{entityName}}.model';
import { {{className}}Service } from './{{entityName}}.service';

@ApiTags('{{routePath}}')
@Controller('{{routePath}}')
export class {{className}}Controller {
  constructor(private readonly service: {{className}}Service) {}

  @Get()
  findAll(): Promise<{{className}}[]> {
    return this.service.findAll();
  }

  @Get(':id')
  findOne(@Param('id', ParseIntPipe) id: number): Promise<{{className}}> {
    return this.service.findOne(id);
  }

  @Post()
  create(@Body() body: Partial<{{className}}>): Promise<{{className}}> {
    return this.service.create(body);
  }

  @Put(':id')
  update(
    @Param('id', ParseIntPipe) id: number,
    @Body() body: Partial<{{className}}>,
  ): Promise<{{className}}> {
    return this.service.update(id, body);
  }

  @Delete(':id')
  remove(@Param('id', ParseIntPipe) id: number): Promise<void> {
    return this.service.remove(id);
  }
}
"#;

/// `entity/module.ts.hbs`
pub const MODULE_TS: &str = r#"import { Module } from '@nestjs/common';
import { TypeOrmModule } from '@nestjs/typeorm';
import { {{className}} } from './{{entityName}}.model';
import { {{className}}Controller } from './{{entityName}}.controller';
import { {{className}}Service } from './{{entityName}}.service';

@Module({
  imports: [TypeOrmModule.forFeature([{{className}}])],
  controllers: [{{className}}Controller],
  providers: [{{className}}Service],
  exports: [{{className}}Service],
})
export class {{moduleClass}} {}
"#;

/// `entity/list.tsx.hbs`
pub const REACT_LIST: &str = r#"import { useEffect, useState } from 'react';

const API_URL = 'http://localhost:3000/{{routePath}}';

export interface {{className}} {
  id: number;
{{#each fields}}
  {{name}}: {{tsType}};
{{/each}}
}

export default function {{className}}List() {
  const [items, setItems] = useState<{{className}}[]>([]);

  useEffect(() => {
    fetch(API_URL)
      .then((res) => res.json())
      .then(setItems);
  }, []);

  return (
    <div className="p-4">
      <h1 className="text-2xl font-bold mb-4">{{title}} list</h1>
      <table className="min-w-full border">
        <thead>
          <tr>
            <th className="border px-2 py-1">id</th>
{{#each fields}}
            <th className="border px-2 py-1">{{name}}</th>
{{/each}}
          </tr>
        </thead>
        <tbody>
          {items.map((item) => (
            <tr key={item.id}>
              <td className="border px-2 py-1">{item.id}</td>
{{#each fields}}
              <td className="border px-2 py-1">{String(item.{{name}})}</td>
{{/each}}
            </tr>
          ))}
        </tbody>
      </table>
    </div>
  );
}
"#;

/// `entity/form.tsx.hbs`
pub const REACT_FORM: &str = r#"import { FormEvent, useState } from 'react';

const API_URL = 'http://localhost:3000/{{routePath}}';

export default function {{className}}Form({ onSaved }: { onSaved?: () => void }) {
  const [form, setForm] = useState<Record<string, string>>({});

  const handleSubmit = async (event: FormEvent) => {
    event.preventDefault();
    await fetch(API_URL, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(form),
    });
    setForm({});
    onSaved?.();
  };

  return (
    <form onSubmit={handleSubmit} className="space-y-2 p-4">
{{#each fields}}
      <label className="block">
        <span>{{name}}</span>
        <input
          className="border px-2 py-1 w-full"
          name="{{name}}"
          value={form.{{name}} ?? ''}
          onChange={(e) => setForm({ ...form, {{name}}: e.target.value })}
        />
      </label>
{{/each}}
      <button type="submit" className="bg-blue-500 text-white px-4 py-1 rounded">
        Save {{title}}
      </button>
    </form>
  );
}
"#;

/// `entity/detail.tsx.hbs`
pub const REACT_DETAIL: &str = r#"import { useEffect, useState } from 'react';
import type { {{className}} } from './{{className}}List';

export default function {{className}}Detail({ id }: { id: number }) {
  const [item, setItem] = useState<{{className}} | null>(null);

  useEffect(() => {
    fetch(`http://localhost:3000/{{routePath}}/${id}`)
      .then((res) => res.json())
      .then(setItem);
  }, [id]);

  if (!item) {
    return <p className="p-4">Loading...</p>;
  }

  return (
    <dl className="p-4 grid grid-cols-2 gap-2">
      <dt className="font-semibold">id</dt>
      <dd>{item.id}</dd>
{{#each fields}}
      <dt className="font-semibold">{{name}}</dt>
      <dd>{String(item.{{name}})}</dd>
{{/each}}
    </dl>
  );
}
"#;

/// `vue/entity-list.vue.hbs`
pub const VUE_LIST: &str = r#"<template>
  <div class="p-4">
    <h1 class="text-2xl font-bold mb-4">{{title}} list</h1>
    <table class="min-w-full border">
      <thead>
        <tr>
          <th class="border px-2 py-1">id</th>
{{#each fields}}
          <th class="border px-2 py-1">{{name}}</th>
{{/each}}
        </tr>
      </thead>
      <tbody>
        <tr v-for="item in items" :key="item.id">
          <td class="border px-2 py-1">{{bind "item" "id"}}</td>
{{#each fields}}
          <td class="border px-2 py-1">{{bind "item" name}}</td>
{{/each}}
        </tr>
      </tbody>
    </table>
  </div>
</template>

<script setup lang="ts">
import { onMounted, ref } from 'vue';

interface {{className}} {
  id: number;
{{#each fields}}
  {{name}}: {{tsType}};
{{/each}}
}

const items = ref<{{className}}[]>([]);

onMounted(async () => {
  const res = await fetch('http://localhost:3000/{{routePath}}');
  items.value = await res.json();
});
</script>
"#;

/// `vue/entity-form.vue.hbs`
pub const VUE_FORM: &str = r#"<template>
  <form class="space-y-2 p-4" @submit.prevent="submit">
{{#each fields}}
    <label class="block">
      <span>{{name}}</span>
      <input v-model="form.{{name}}" name="{{name}}" class="border px-2 py-1 w-full" />
    </label>
{{/each}}
    <button type="submit" class="bg-blue-500 text-white px-4 py-1 rounded">Save {{title}}</button>
  </form>
</template>

<script setup lang="ts">
import { reactive } from 'vue';

const emit = defineEmits<{ saved: [] }>();
const form = reactive<Record<string, string>>({});

async function submit() {
  await fetch('http://localhost:3000/{{routePath}}', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(form),
  });
  emit('saved');
}
</script>
"#;

/// `vue/entity-detail.vue.hbs`
pub const VUE_DETAIL: &str = r#"<template>
  <dl v-if="item" class="p-4 grid grid-cols-2 gap-2">
    <dt class="font-semibold">id</dt>
    <dd>{{bind "item" "id"}}</dd>
{{#each fields}}
    <dt class="font-semibold">{{name}}</dt>
    <dd>{{bind "item" name}}</dd>
{{/each}}
  </dl>
  <p v-else class="p-4">Loading...</p>
</template>

<script setup lang="ts">
import { onMounted, ref } from 'vue';

const props = defineProps<{ id: number }>();
const item = ref<Record<string, unknown> | null>(null);

onMounted(async () => {
  const res = await fetch(`http://localhost:3000/{{routePath}}/${props.id}`);
  item.value = await res.json();
});
</script>
"#;

/// `angular/entity-list.component.ts.hbs`
pub const ANGULAR_LIST: &str = r#"import { Component, OnInit } from '@angular/core';
import { CommonModule } from '@angular/common';
import { HttpClient, HttpClientModule } from '@angular/common/http';

export interface {{className}} {
  id: number;
{{#each fields}}
  {{name}}: {{tsType}};
{{/each}}
}

@Component({
  selector: 'app-{{kebabName}}-list',
  standalone: true,
  imports: [CommonModule, HttpClientModule],
  template: `
    <div class="p-4">
      <h1 class="text-2xl font-bold mb-4">{{title}} list</h1>
      <table class="min-w-full border">
        <tr>
          <th class="border px-2 py-1">id</th>
{{#each fields}}
          <th class="border px-2 py-1">{{name}}</th>
{{/each}}
        </tr>
        <tr *ngFor="let item of items">
          <td class="border px-2 py-1">{{bind "item" "id"}}</td>
{{#each fields}}
          <td class="border px-2 py-1">{{bind "item" name}}</td>
{{/each}}
        </tr>
      </table>
    </div>
  `,
})
export class {{className}}ListComponent implements OnInit {
  items: {{className}}[] = [];

  constructor(private readonly http: HttpClient) {}

  ngOnInit(): void {
    this.http
      .get<{{className}}[]>('http://localhost:3000/{{routePath}}')
      .subscribe((items) => (this.items = items));
  }
}
"#;

/// `angular/entity-form.component.ts.hbs`
pub const ANGULAR_FORM: &str = r#"import { Component, EventEmitter, Output } from '@angular/core';
import { FormsModule } from '@angular/forms';
import { HttpClient, HttpClientModule } from '@angular/common/http';

@Component({
  selector: 'app-{{kebabName}}-form',
  standalone: true,
  imports: [FormsModule, HttpClientModule],
  template: `
    <form class="space-y-2 p-4" (ngSubmit)="submit()">
{{#each fields}}
      <label class="block">
        <span>{{name}}</span>
        <input [(ngModel)]="form['{{name}}']" name="{{name}}" class="border px-2 py-1 w-full" />
      </label>
{{/each}}
      <button type="submit" class="bg-blue-500 text-white px-4 py-1 rounded">Save {{title}}</button>
    </form>
  `,
})
export class {{className}}FormComponent {
  @Output() saved = new EventEmitter<void>();
  form: Record<string, string> = {};

  constructor(private readonly http: HttpClient) {}

  submit(): void {
    this.http.post('http://localhost:3000/{{routePath}}', this.form).subscribe(() => {
      this.form = {};
      this.saved.emit();
    });
  }
}
"#;

/// `angular/entity-detail.component.ts.hbs`
pub const ANGULAR_DETAIL: &str = r#"import { Component, Input, OnInit } from '@angular/core';
import { CommonModule } from '@angular/common';
import { HttpClient, HttpClientModule } from '@angular/common/http';

@Component({
  selector: 'app-{{kebabName}}-detail',
  standalone: true,
  imports: [CommonModule, HttpClientModule],
  template: `
    <dl *ngIf="item; else loading" class="p-4 grid grid-cols-2 gap-2">
      <dt class="font-semibold">id</dt>
      <dd>{{bind "item" "id"}}</dd>
{{#each fields}}
      <dt class="font-semibold">{{name}}</dt>
      <dd>{{bind "item" name}}</dd>
{{/each}}
    </dl>
    <ng-template #loading><p class="p-4">Loading...</p></ng-template>
  `,
})
export class {{className}}DetailComponent implements OnInit {
  @Input() id!: number;
  item: Record<string, unknown> | null = null;

  constructor(private readonly http: HttpClient) {}

  ngOnInit(): void {
    this.http
      .get<Record<string, unknown>>(`http://localhost:3000/{{routePath}}/${this.id}`)
      .subscribe((item) => (this.item = item));
  }
}
"#;

/// Embedded template bodies keyed by identifier
pub const ENTITY_TEMPLATES: &[(&str, &str)] = &[
    ("entity/model.ts.hbs", MODEL_TS),
    ("entity/service.ts.hbs", SERVICE_TS),
    ("entity/controller.ts.hbs", CONTROLLER_TS),
    ("entity/module.ts.hbs", MODULE_TS),
    ("entity/list.tsx.hbs", REACT_LIST),
    ("entity/form.tsx.hbs", REACT_FORM),
    ("entity/detail.tsx.hbs", REACT_DETAIL),
    ("vue/entity-list.vue.hbs", VUE_LIST),
    ("vue/entity-form.vue.hbs", VUE_FORM),
    ("vue/entity-detail.vue.hbs", VUE_DETAIL),
    ("angular/entity-list.component.ts.hbs", ANGULAR_LIST),
    ("angular/entity-form.component.ts.hbs", ANGULAR_FORM),
    ("angular/entity-detail.component.ts.hbs", ANGULAR_DETAIL),
];
